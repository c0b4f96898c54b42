//! Interactive questions asked before a run starts.

use dialoguer::Input;

use crate::codes::{FilterCodes, FilterKind};
use crate::query::Filters;
use crate::Result;

/// Asks for every filter in `kinds` and stores the answers in `filters`.
/// An invalid answer is reported and the same question is asked again.
pub fn prompt_filters(kinds: &[FilterKind], filters: &mut Filters) -> Result<()> {
    for &kind in kinds {
        println!("{}", kind.menu());
        let answer: String = Input::new()
            .with_prompt(format!(
                "Select {} codes (comma separated, 0 or empty for all)",
                kind.param_name()
            ))
            .allow_empty(true)
            .validate_with(move |input: &String| check_filter_answer(kind, input))
            .interact_text()?;
        filters.set(kind, FilterCodes::parse(kind, &answer)?);
    }
    Ok(())
}

pub fn prompt_api_key(current: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt("Please input api key");
    if let Some(current) = current {
        input = input.default(current.to_owned());
    }
    let key = input.validate_with(check_key_answer).interact_text()?;
    Ok(key.trim().to_owned())
}

fn check_filter_answer(kind: FilterKind, input: &str) -> Result<()> {
    FilterCodes::parse(kind, input).map(|_| ())
}

fn check_key_answer(input: &String) -> core::result::Result<(), &'static str> {
    if input.trim().is_empty() {
        return Err("the api key cannot be empty");
    }
    Ok(())
}
