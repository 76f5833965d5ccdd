pub mod types;
pub mod logger;
pub mod encoding;
pub mod delimited;
pub mod tabular;
pub mod verse_ref;
pub mod section_names;
pub mod septuagint;
pub mod xml_tree;
pub mod nestle;

use std::env;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::error::Error;

use app_dirs::{get_app_root, AppDataType, AppInfo};
use dotenvy::dotenv;

pub const APP_INFO: AppInfo = AppInfo{name: "koine", author: "koine-texts"};

/// Default input files of the Swete Septuagint dump, relative to the working directory.
pub static SWETE_VERSIFICATION_CSV: &str = "00-Swete_versification.csv";
pub static SWETE_WORDS_CSV: &str = "01-Swete_word_with_punctuations.csv";

/// Default root document of the Nestle 1904 dump.
pub static NESTLE_ROOT_XML: &str = "xml/nestle1904.xml";

/// Directory for the log files.
///
/// Precedence:
/// - KOINE_DIR env var (also read from .env)
/// - the per-user data directory
pub fn get_create_koine_dir() -> Result<PathBuf, Box<dyn Error>> {
    dotenv().ok();

    let p = match env::var("KOINE_DIR") {
        Ok(s) if !s.trim().is_empty() => PathBuf::from(s),
        _ => get_app_root(AppDataType::UserData, &APP_INFO)?,
    };

    if !p.exists() {
        create_dir_all(&p)?;
    }
    Ok(p)
}
