//! Collects the calculator's raw inputs as strings.
//!
//! Values are not interpreted here; the calculator parses them later.

use crate::cli::io::Terminal;
use crate::errors::CliError;
use crate::storage::ProfileInputs;

/// Prompts for each field in order, offering the value from `defaults`.
///
/// An empty answer keeps the default. Keys in `defaults` that are not listed in
/// `fields` are carried over untouched so re-saving a profile never drops them.
pub fn collect_inputs<T>(
    terminal: &mut T,
    fields: &[String],
    defaults: &ProfileInputs,
) -> Result<ProfileInputs, CliError>
where
    T: Terminal + ?Sized,
{
    let mut inputs = defaults.clone();
    for field in fields {
        let prompt = match defaults.get(field) {
            Some(current) if !current.is_empty() => format!("{field} [{current}]: "),
            _ => format!("{field}: "),
        };
        let answer = terminal.prompt_line(&prompt)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            inputs.insert(field.clone(), answer.to_string());
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_mode::ScriptedTerminal;

    fn fields() -> Vec<String> {
        vec!["home_price".into(), "monthly_rent".into()]
    }

    #[test]
    fn blank_answers_keep_defaults() {
        let defaults = ProfileInputs::from([
            ("home_price".to_string(), "450k".to_string()),
            ("notes".to_string(), "keep me".to_string()),
        ]);
        let mut terminal = ScriptedTerminal::new(["", " 2.1k "]);
        let inputs = collect_inputs(&mut terminal, &fields(), &defaults).expect("inputs");
        assert_eq!(inputs.get("home_price").map(String::as_str), Some("450k"));
        assert_eq!(inputs.get("monthly_rent").map(String::as_str), Some("2.1k"));
        assert_eq!(inputs.get("notes").map(String::as_str), Some("keep me"));
        assert!(terminal.contains("home_price [450k]: "));
    }

    #[test]
    fn unanswered_fields_are_left_out() {
        let mut terminal = ScriptedTerminal::new(Vec::<String>::new());
        let inputs =
            collect_inputs(&mut terminal, &fields(), &ProfileInputs::new()).expect("inputs");
        assert!(inputs.is_empty());
    }
}
