//! Number field + slider pairs that mirror each other.
//!
//! All three parameters share the same bounds and the same rule: whichever
//! control was edited last wins, and both controls take its value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    PriorA,
    Sensitivity,
    FalsePositiveRate,
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [
        Parameter::PriorA,
        Parameter::Sensitivity,
        Parameter::FalsePositiveRate,
    ];

    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;
    pub const STEP: f64 = 0.01;

    /// Form/DOM identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Parameter::PriorA => "prior_a",
            Parameter::Sensitivity => "sensitivity",
            Parameter::FalsePositiveRate => "false_positive_rate",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Parameter::PriorA => "Probabilidad inicial P(A)",
            Parameter::Sensitivity => "Sensibilidad P(B|A)",
            Parameter::FalsePositiveRate => "Falsos positivos P(B|¬A)",
        }
    }

    pub fn default_value(&self) -> f64 {
        match self {
            Parameter::PriorA => 0.02,
            Parameter::Sensitivity => 0.9,
            Parameter::FalsePositiveRate => 0.01,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlSource {
    Field,
    Slider,
}

/// Current values of a field/slider pair.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedControl<T> {
    pub field: Option<T>,
    pub slider: Option<T>,
}

impl<T: Copy> LinkedControl<T> {
    pub fn new(value: T) -> Self {
        Self {
            field: Some(value),
            slider: Some(value),
        }
    }

    /// Apply the edited control's value to both controls.
    pub fn resolve(self, edited: ControlSource) -> Self {
        let value = match edited {
            ControlSource::Field => self.field,
            ControlSource::Slider => self.slider,
        };
        Self {
            field: value,
            slider: value,
        }
    }

    pub fn value(&self) -> Option<T> {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn field_edit_wins() {
        let c = LinkedControl {
            field: Some(0.3),
            slider: Some(0.7),
        };
        assert_eq!(c.resolve(ControlSource::Field), LinkedControl::new(0.3));
    }

    #[test]
    fn slider_edit_wins() {
        let c = LinkedControl {
            field: Some(0.3),
            slider: Some(0.7),
        };
        assert_eq!(c.resolve(ControlSource::Slider), LinkedControl::new(0.7));
    }

    #[test]
    fn clearing_the_field_clears_both() {
        let c = LinkedControl {
            field: None,
            slider: Some(0.7),
        };
        let r = c.resolve(ControlSource::Field);
        assert_eq!(r.field, None);
        assert_eq!(r.slider, None);
        assert_eq!(r.value(), None);
    }

    #[test]
    fn defaults_are_within_shared_bounds() {
        for p in Parameter::ALL {
            let v = p.default_value();
            assert!((Parameter::MIN..=Parameter::MAX).contains(&v), "{}", p.id());
        }
    }

    proptest! {
        #[test]
        fn resolved_controls_agree(field in proptest::option::of(0.0f64..=1.0), slider in proptest::option::of(0.0f64..=1.0), from_slider in any::<bool>()) {
            let edited = if from_slider { ControlSource::Slider } else { ControlSource::Field };
            let r = LinkedControl { field, slider }.resolve(edited);
            prop_assert_eq!(r.field, r.slider);
            prop_assert_eq!(r.field, if from_slider { slider } else { field });
        }
    }
}
