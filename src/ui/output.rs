use rasterpack::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warning(warning: &ConfigWarning, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };

    let mut out = format!("{} Unknown config key '{}' in {}", icon, warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_color: bool, supports_unicode: bool) {
    for w in warnings {
        eprintln!("{}", render_config_warning(w, supports_color, supports_unicode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_location_and_suggestion() {
        let warning = ConfigWarning {
            key: "ouput".to_string(),
            file: PathBuf::from("rasterpack.toml"),
            line: Some(2),
            suggestion: Some("output".to_string()),
        };

        insta::assert_snapshot!(render_config_warning(&warning, false, false), @r"
        [WARN] Unknown config key 'ouput' in rasterpack.toml:2
           Did you mean 'output'?
        ");
    }
}
