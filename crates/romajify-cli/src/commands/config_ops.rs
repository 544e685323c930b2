use std::path::Path;

use romajify::{
    default_settings_config, default_tables_config, validate_settings_config,
    validate_tables_config, RomajifyError,
};

pub fn tables_export() -> &'static str {
    default_tables_config()
}

pub fn tables_validate(file: &str) -> Result<String, RomajifyError> {
    let (monographs, digraphs) = validate_tables_config(Path::new(file))?;
    Ok(format!("OK: {monographs} monographs, {digraphs} digraphs"))
}

pub fn settings_export() -> &'static str {
    default_settings_config()
}

pub fn settings_validate(file: &str) -> Result<String, RomajifyError> {
    let s = validate_settings_config(Path::new(file))?;
    Ok(format!(
        "OK: output.uppercase={}, hepburn.traditional={}",
        s.output.uppercase, s.hepburn.traditional
    ))
}
