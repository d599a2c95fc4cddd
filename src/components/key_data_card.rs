//! Key Data Card Component
//!
//! One card per nutritional counter: icon tile, value with unit, label.

use leptos::*;

use crate::api::KeyData;

/// The four nutritional counters shown next to the charts
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NutrientKind {
    Calories,
    Proteins,
    Carbohydrates,
    Lipids,
}

impl NutrientKind {
    /// French display label
    pub fn label(self) -> &'static str {
        match self {
            NutrientKind::Calories => "Calories",
            NutrientKind::Proteins => "Protéines",
            NutrientKind::Carbohydrates => "Glucides",
            NutrientKind::Lipids => "Lipides",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            NutrientKind::Calories => "kCal",
            _ => "g",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NutrientKind::Calories => "🔥",
            NutrientKind::Proteins => "🍗",
            NutrientKind::Carbohydrates => "🍎",
            NutrientKind::Lipids => "🍔",
        }
    }

    fn icon_tile_class(self) -> &'static str {
        match self {
            NutrientKind::Calories => "bg-red-100 text-red-600",
            NutrientKind::Proteins => "bg-blue-100 text-blue-600",
            NutrientKind::Carbohydrates => "bg-yellow-100 text-yellow-600",
            NutrientKind::Lipids => "bg-pink-100 text-pink-600",
        }
    }

    /// Counter value for this kind
    pub fn value(self, key_data: &KeyData) -> f64 {
        match self {
            NutrientKind::Calories => key_data.calorie_count,
            NutrientKind::Proteins => key_data.protein_count,
            NutrientKind::Carbohydrates => key_data.carbohydrate_count,
            NutrientKind::Lipids => key_data.lipid_count,
        }
    }
}

/// Format a counter the way the cards display it: thousands separated
/// with a comma, no decimals.
pub fn format_counter(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Key data card component
#[component]
pub fn KeyDataCard(
    kind: NutrientKind,
    value: f64,
) -> impl IntoView {
    view! {
        <div class="flex justify-start items-center bg-gray-50 h-[124px] p-8 rounded-[5px]">
            <div class=format!(
                "flex justify-center items-center rounded-md w-[60px] h-[60px] mr-6 text-2xl {}",
                kind.icon_tile_class()
            )>
                {kind.icon()}
            </div>

            <div class="flex flex-col items-start text-[20px] font-bold">
                <p class="text-gray-900">{format!("{} {}", format_counter(value), kind.unit())}</p>
                <p class="text-gray-500 text-[14px] font-medium">{kind.label()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_groups_thousands() {
        assert_eq!(format_counter(1930.0), "1,930");
        assert_eq!(format_counter(90.0), "90");
        assert_eq!(format_counter(2500.0), "2,500");
        assert_eq!(format_counter(1234567.0), "1,234,567");
    }

    #[test]
    fn units_match_the_kind() {
        assert_eq!(NutrientKind::Calories.unit(), "kCal");
        assert_eq!(NutrientKind::Proteins.unit(), "g");
        assert_eq!(NutrientKind::Carbohydrates.unit(), "g");
        assert_eq!(NutrientKind::Lipids.unit(), "g");
    }

    #[test]
    fn values_read_the_matching_counter() {
        let key_data = KeyData {
            calorie_count: 1930.0,
            protein_count: 155.0,
            carbohydrate_count: 290.0,
            lipid_count: 50.0,
        };
        assert_eq!(NutrientKind::Calories.value(&key_data), 1930.0);
        assert_eq!(NutrientKind::Proteins.value(&key_data), 155.0);
        assert_eq!(NutrientKind::Carbohydrates.value(&key_data), 290.0);
        assert_eq!(NutrientKind::Lipids.value(&key_data), 50.0);
    }
}
