// File: crates/metrics/src/category.rs
// Summary: Closed category registries mapping tags to icon/color styles.
// Notes:
// - Tags are lowercase snake_case and parse through `FromStr`.
// - Debt kind inference from free text lives in `DebtKind::guess_from_name` and is never implicit.

use std::fmt;
use std::str::FromStr;

use fintrack_chart::Color;
use serde::Deserialize;

use crate::error::MetricsError;

/// Presentation descriptor for a category: icon identifier plus accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub color: Color,
}

const fn style(icon: &'static str, r: u8, g: u8, b: u8) -> CategoryStyle {
    CategoryStyle { icon, color: Color::from_rgb(r, g, b) }
}

macro_rules! registry {
    ($name:ident { $($variant:ident => $tag:literal, $icon:literal, ($r:literal, $g:literal, $b:literal);)+ }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn tag(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            pub fn style(self) -> CategoryStyle {
                match self {
                    $($name::$variant => style($icon, $r, $g, $b),)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.tag())
            }
        }

        impl FromStr for $name {
            type Err = MetricsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
                $name::ALL
                    .iter()
                    .copied()
                    .find(|c| c.tag() == key)
                    .ok_or_else(|| MetricsError::UnknownCategory(s.to_string()))
            }
        }
    };
}

registry!(ExpenseCategory {
    Food => "food", "restaurant", (0xF5, 0x9E, 0x0B);
    Transport => "transport", "car", (0x3B, 0x82, 0xF6);
    Housing => "housing", "home", (0x8B, 0x5C, 0xF6);
    Utilities => "utilities", "flash", (0x06, 0xB6, 0xD4);
    Entertainment => "entertainment", "film", (0xEC, 0x48, 0x99);
    Shopping => "shopping", "bag", (0xF9, 0x73, 0x16);
    Health => "health", "medkit", (0xEF, 0x44, 0x44);
    Education => "education", "school", (0x14, 0xB8, 0xA6);
    Travel => "travel", "airplane", (0x63, 0x66, 0xF1);
    Other => "other", "ellipsis", (0x9C, 0xA3, 0xAF);
});

registry!(IncomeCategory {
    Salary => "salary", "briefcase", (0x10, 0xB9, 0x81);
    Freelance => "freelance", "laptop", (0x22, 0xC5, 0x5E);
    Business => "business", "storefront", (0x84, 0xCC, 0x16);
    Investment => "investment", "trending_up", (0x0E, 0xA5, 0xE9);
    Rental => "rental", "key", (0xA8, 0x55, 0xF7);
    Gift => "gift", "gift", (0xF4, 0x3F, 0x5E);
    Other => "other", "cash", (0x9C, 0xA3, 0xAF);
});

registry!(DebtKind {
    CreditCard => "credit_card", "card", (0xEF, 0x44, 0x44);
    StudentLoan => "student_loan", "school", (0x3B, 0x82, 0xF6);
    Mortgage => "mortgage", "home", (0x8B, 0x5C, 0xF6);
    AutoLoan => "auto_loan", "car", (0xF5, 0x9E, 0x0B);
    PersonalLoan => "personal_loan", "person", (0x14, 0xB8, 0xA6);
    Medical => "medical", "medkit", (0xEC, 0x48, 0x99);
    Other => "other", "document", (0x9C, 0xA3, 0xAF);
});

impl DebtKind {
    /// Best-effort kind from a free-text debt name ("Chase Visa" → credit card).
    ///
    /// Keyword order matters: "card" is tested before "car", "student" before "loan".
    pub fn guess_from_name(name: &str) -> DebtKind {
        const RULES: &[(&[&str], DebtKind)] = &[
            (&["credit", "card", "visa", "mastercard", "amex"], DebtKind::CreditCard),
            (&["student", "tuition", "college", "university"], DebtKind::StudentLoan),
            (&["mortgage", "home", "house"], DebtKind::Mortgage),
            (&["auto", "car", "vehicle"], DebtKind::AutoLoan),
            (&["medical", "hospital", "doctor"], DebtKind::Medical),
            (&["personal", "loan"], DebtKind::PersonalLoan),
        ];
        let lower = name.to_lowercase();
        RULES
            .iter()
            .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
            .map(|&(_, kind)| kind)
            .unwrap_or(DebtKind::Other)
    }
}

/// Style for an expense tag, `None` for tags outside the registry.
pub fn expense_style(tag: &str) -> Option<CategoryStyle> {
    tag.parse::<ExpenseCategory>().ok().map(ExpenseCategory::style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_loosely() {
        assert_eq!("Credit Card".parse::<DebtKind>(), Ok(DebtKind::CreditCard));
        assert_eq!("student-loan".parse::<DebtKind>(), Ok(DebtKind::StudentLoan));
        assert_eq!(" FOOD ".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Food));
        assert!(matches!("lottery".parse::<IncomeCategory>(), Err(MetricsError::UnknownCategory(_))));
    }

    #[test]
    fn every_variant_round_trips_through_its_tag() {
        for c in ExpenseCategory::ALL {
            assert_eq!(c.tag().parse::<ExpenseCategory>(), Ok(*c));
        }
        for k in DebtKind::ALL {
            assert_eq!(k.to_string().parse::<DebtKind>(), Ok(*k));
        }
    }
}
