use super::FieldChild;
use crate::constants::{DEFAULT_DATE_FORMAT, MAX_INPUT_LENGTH};
use crate::utils::datetime::{format_date, is_date_input_char, parse_date};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateChild {
    pub value: Option<NaiveDate>,
    pub id: String,
    pub input: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParams {
    pub id: String,
    pub value: Option<NaiveDate>,
    pub format: String,
}

impl Default for DateParams {
    fn default() -> Self {
        Self {
            id: String::new(),
            value: None,
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateMsg {
    Input(char),
    Backspace,
    Clear,
    Set(Option<NaiveDate>),
}

impl DateChild {
    fn reparse(&mut self) {
        self.value = parse_date(&self.input, &self.format);
    }
}

impl FieldChild for DateChild {
    type Params = DateParams;
    type Value = NaiveDate;
    type Msg = DateMsg;

    fn init(params: DateParams) -> Self {
        let input = params
            .value
            .map(|date| format_date(date, &params.format))
            .unwrap_or_default();
        Self {
            value: params.value,
            id: params.id,
            input,
            format: params.format,
        }
    }

    fn update(&mut self, msg: DateMsg) {
        match msg {
            DateMsg::Input(c) => {
                if is_date_input_char(c) && self.input.chars().count() < MAX_INPUT_LENGTH {
                    self.input.push(c);
                    self.reparse();
                }
            }
            DateMsg::Backspace => {
                self.input.pop();
                self.reparse();
            }
            DateMsg::Clear => {
                self.input.clear();
                self.value = None;
            }
            DateMsg::Set(value) => {
                self.input = value.map(|date| format_date(date, &self.format)).unwrap_or_default();
                self.value = value;
            }
        }
    }

    fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    fn input(&self) -> &str {
        &self.input
    }

    fn key_to_msg(key: &KeyEvent) -> Option<DateMsg> {
        match key.code {
            KeyCode::Char(c) if is_date_input_char(c) => Some(DateMsg::Input(c)),
            KeyCode::Backspace => Some(DateMsg::Backspace),
            KeyCode::Delete => Some(DateMsg::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(child: &mut DateChild, text: &str) {
        for c in text.chars() {
            child.update(DateMsg::Input(c));
        }
    }

    #[test]
    fn test_value_set_once_input_parses() {
        let mut child = DateChild::init(DateParams::default());
        type_text(&mut child, "2025-03-0");
        assert_eq!(child.value(), None);
        type_text(&mut child, "9");
        assert_eq!(child.value(), NaiveDate::from_ymd_opt(2025, 3, 9));

        child.update(DateMsg::Backspace);
        assert_eq!(child.value(), None);
        assert_eq!(child.input(), "2025-03-0");
    }

    #[test]
    fn test_letters_are_ignored() {
        let mut child = DateChild::init(DateParams::default());
        type_text(&mut child, "ab");
        assert!(child.input().is_empty());
    }

    #[test]
    fn test_set_uses_configured_format() {
        let mut child = DateChild::init(DateParams {
            format: "%d/%m/%Y".to_string(),
            ..DateParams::default()
        });
        child.update(DateMsg::Set(NaiveDate::from_ymd_opt(2024, 12, 1)));
        assert_eq!(child.input(), "01/12/2024");
        child.update(DateMsg::Clear);
        assert_eq!(child.value(), None);
    }
}
