pub const CMAKE_PARSER_FILE_NAME: &str = "cmake_parser.toml"; // the bundled definition

pub const CMAKE_PARSER: &str = include_str!("cmake_parser.toml");
