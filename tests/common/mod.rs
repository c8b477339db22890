use chrono::prelude::*;

use simplelog::*;

use std::path::PathBuf;
use std::fs::{File, create_dir_all};
use std::sync::Once;

static LOGGING: Once = Once::new();

/// Logs to the terminal and to a timestamped log file below `test_output`.
///
/// Only the first call in a test binary installs the logger, later calls
/// do nothing.
pub fn init_test_logging(test_name: &str) {
    LOGGING.call_once(|| {
        let mut path_buf = PathBuf::from("test_output");
        path_buf.push(format!("{}-{}", filename_timestamp(), test_name));

        create_dir_all(&path_buf).expect("Test output directory could not be created");

        let log_file = create_log_file(&mut path_buf);

        CombinedLogger::init(
            vec![
                TermLogger::new(LogLevelFilter::Info, Config::default()).unwrap(),
                WriteLogger::new(LogLevelFilter::Trace, Config::default(), log_file),
            ]
        ).unwrap();

        info!("Logging {} to {:?}", test_name, path_buf);
    });
}

fn create_log_file(parent_directory: &mut PathBuf) -> File {
    parent_directory.push(format!("log-{}", filename_timestamp()));
    parent_directory.set_extension("log");

    let log_file = File::create(&parent_directory).expect("Log file could not be created");
    parent_directory.pop();

    log_file
}

/// ISO 8601 timestamp without colons, so it can be used in file names
fn filename_timestamp() -> String {
    Utc::now()
        .to_rfc3339()
        .replace(":", "")
}
