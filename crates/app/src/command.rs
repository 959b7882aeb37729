//! Line commands understood by the shell.

use stockpad_core::ProductId;

use crate::error::AppError;
use crate::navigation::{ParseTabError, Tab};

pub const HELP: &str = "\
commands:
  add               add a placeholder product (list)
  open <id>         edit a product (list)
  remove <id>       remove a product (list)
  title <text>      set the product name (form)
  qty <text>        set the quantity, digits only (form)
  price <text>      set the price, digits only (form)
  save              save the form and go back (form)
  back              discard the form and go back (form)
  tab <name>        switch to `products` or `orders`
  export            print the product list as JSON
  show              redraw the current screen
  help              show this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Open(ProductId),
    Remove(ProductId),
    SetTitle(String),
    SetQuantity(String),
    SetPrice(String),
    Save,
    Back,
    SwitchTab(Tab),
    Export,
    Show,
    Help,
    Quit,
}

impl Action {
    /// Parse one input line.
    ///
    /// Text arguments keep everything after the first whitespace verbatim, so
    /// `title` alone sets an empty name.
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim(), ""),
        };

        let action = match word.to_ascii_lowercase().as_str() {
            "add" => Action::Add,
            "open" | "edit" => Action::Open(rest.parse()?),
            "remove" | "rm" => Action::Remove(rest.parse()?),
            "title" | "name" => Action::SetTitle(rest.to_string()),
            "qty" | "quantity" => Action::SetQuantity(rest.to_string()),
            "price" => Action::SetPrice(rest.to_string()),
            "save" => Action::Save,
            "back" => Action::Back,
            "tab" => Action::SwitchTab(
                rest.parse()
                    .map_err(|e: ParseTabError| AppError::UnknownCommand(format!("tab {}", e.0)))?,
            ),
            "export" => Action::Export,
            "show" | "" => Action::Show,
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            _ => return Err(AppError::UnknownCommand(line.trim().to_string())),
        };
        Ok(action)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Open(_) => "open",
            Action::Remove(_) => "remove",
            Action::SetTitle(_) => "title",
            Action::SetQuantity(_) => "qty",
            Action::SetPrice(_) => "price",
            Action::Save => "save",
            Action::Back => "back",
            Action::SwitchTab(_) => "tab",
            Action::Export => "export",
            Action::Show => "show",
            Action::Help => "help",
            Action::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpad_core::DomainError;

    #[test]
    fn parses_id_commands() {
        assert_eq!(Action::parse("open 3").unwrap(), Action::Open(ProductId::from_raw(3)));
        assert_eq!(Action::parse("rm 12\n").unwrap(), Action::Remove(ProductId::from_raw(12)));
    }

    #[test]
    fn text_arguments_are_verbatim() {
        assert_eq!(
            Action::parse("title Arroz  integral").unwrap(),
            Action::SetTitle("Arroz  integral".to_string())
        );
        assert_eq!(Action::parse("qty 5kg9").unwrap(), Action::SetQuantity("5kg9".to_string()));
        assert_eq!(Action::parse("title").unwrap(), Action::SetTitle(String::new()));
    }

    #[test]
    fn any_whitespace_separates_the_command_word() {
        assert_eq!(Action::parse("open\t1").unwrap(), Action::Open(ProductId::from_raw(1)));
        assert_eq!(Action::parse("  price\t12a").unwrap(), Action::SetPrice("12a".to_string()));
        assert_eq!(Action::parse("title\tRice").unwrap(), Action::SetTitle("Rice".to_string()));
    }

    #[test]
    fn bad_id_is_domain_error() {
        match Action::parse("open abc") {
            Err(AppError::Domain(DomainError::InvalidId(_))) => {}
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn tabs_and_unknowns() {
        assert_eq!(Action::parse("tab orders").unwrap(), Action::SwitchTab(Tab::Orders));
        assert!(matches!(Action::parse("tab nope"), Err(AppError::UnknownCommand(ref c)) if c == "tab nope"));
        assert!(matches!(Action::parse("dance"), Err(AppError::UnknownCommand(_))));
    }
}
