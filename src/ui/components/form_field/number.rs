use super::FieldChild;
use crate::constants::MAX_INPUT_LENGTH;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, PartialEq)]
pub struct NumberChild {
    pub value: Option<f64>,
    pub id: String,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberParams {
    pub id: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NumberMsg {
    Input(char),
    Backspace,
    Clear,
    Set(Option<f64>),
}

fn parse_number(input: &str) -> Option<f64> {
    input.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl NumberChild {
    fn accepts(&self, c: char) -> bool {
        match c {
            '0'..='9' => true,
            '.' => !self.input.contains('.'),
            '-' => self.input.is_empty(),
            _ => false,
        }
    }
}

impl FieldChild for NumberChild {
    type Params = NumberParams;
    type Value = f64;
    type Msg = NumberMsg;

    fn init(params: NumberParams) -> Self {
        Self {
            value: params.value,
            id: params.id,
            input: params.value.map(|n| n.to_string()).unwrap_or_default(),
        }
    }

    fn update(&mut self, msg: NumberMsg) {
        match msg {
            NumberMsg::Input(c) => {
                if self.accepts(c) && self.input.chars().count() < MAX_INPUT_LENGTH {
                    self.input.push(c);
                    self.value = parse_number(&self.input);
                }
            }
            NumberMsg::Backspace => {
                self.input.pop();
                self.value = parse_number(&self.input);
            }
            NumberMsg::Clear => {
                self.input.clear();
                self.value = None;
            }
            NumberMsg::Set(value) => {
                let value = value.filter(|n| n.is_finite());
                self.input = value.map(|n| n.to_string()).unwrap_or_default();
                self.value = value;
            }
        }
    }

    fn value(&self) -> Option<f64> {
        self.value
    }

    fn input(&self) -> &str {
        &self.input
    }

    fn key_to_msg(key: &KeyEvent) -> Option<NumberMsg> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => Some(NumberMsg::Input(c)),
            KeyCode::Backspace => Some(NumberMsg::Backspace),
            KeyCode::Delete => Some(NumberMsg::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> NumberChild {
        let mut child = NumberChild::init(NumberParams::default());
        for c in text.chars() {
            child.update(NumberMsg::Input(c));
        }
        child
    }

    #[test]
    fn test_parses_decimal_input() {
        let child = typed("1250.50");
        assert_eq!(child.value(), Some(1250.5));
    }

    #[test]
    fn test_single_dot_and_leading_minus_only() {
        let child = typed("-1.2.3-");
        assert_eq!(child.input(), "-1.23");
        assert_eq!(child.value(), Some(-1.23));
    }

    #[test]
    fn test_lone_minus_has_no_value() {
        let child = typed("-");
        assert_eq!(child.value(), None);
    }
}
