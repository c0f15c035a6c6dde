//! # Message Templates
//!
//! Every user-facing sentence, keyed by [`MessageKey`]. Templates use `{name}`
//! placeholders that [`Messages::render`] fills in.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AskMoney,
    AskWinningNumbers,
    AskBonus,
    Purchased,
    Statistics,
    TierLine,
    TierLineWithBonus,
    ProfitRate,
}

pub struct Messages {
    templates: HashMap<MessageKey, String>,
}

impl Default for Messages {
    fn default() -> Self {
        let templates = [
            (MessageKey::AskMoney, "Enter the purchase amount."),
            (MessageKey::AskWinningNumbers, "Enter the winning numbers, separated by commas."),
            (MessageKey::AskBonus, "Enter the bonus number."),
            (MessageKey::Purchased, "You bought {count} tickets."),
            (MessageKey::Statistics, "winning statistics"),
            (MessageKey::TierLine, "{matches} matches ({payout}) - {count}"),
            (
                MessageKey::TierLineWithBonus,
                "{matches} matches + bonus ball ({payout}) - {count}",
            ),
            (MessageKey::ProfitRate, "Total return is {rate}%."),
        ]
        .into_iter()
        .map(|(key, template)| (key, template.to_string()))
        .collect();

        Self { templates }
    }
}

impl Messages {
    /// Replaces the template for `key`.
    pub fn with_template(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.templates.insert(key, template.into());
        self
    }

    pub fn render(&self, key: MessageKey, args: &[(&str, String)]) -> String {
        let template = self
            .templates
            .get(&key)
            .map(String::as_str)
            .unwrap_or_default();

        args.iter().fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
    }
}
