/// Property sources implementing the DevicePropertySource port
mod adb_source;
mod command_runner;
mod dump_file_source;
mod getprop_parser;
mod local_getprop_source;
mod static_source;

pub use adb_source::{AdbPropertySource, DEFAULT_ADB_PATH, DEFAULT_TIMEOUT_SECS};
pub use dump_file_source::GetpropDumpReader;
pub use getprop_parser::parse_getprop_output;
pub use local_getprop_source::{LocalGetpropSource, DEFAULT_GETPROP_PATH};
pub use static_source::StaticPropertySource;
