//! Slider configuration loaded from TOML.
//!
//! ```toml
//! min = -50
//! max = 50
//! value = 30
//! left_value = -10
//! type = "range"
//! anim_time_ms = 150
//! easing = "exponential_out"
//!
//! [style]
//! knob_padding = 6.0
//!
//! [style.indicator]
//! background = 0x33FF4DFF
//! ```
//!
//! Every key is optional. Values are validated before a slider is built, so
//! a bad file fails loudly instead of being silently clamped.

use std::path::Path;

use serde::Deserialize;

use crate::animation::Easing;
use crate::error::{UiError, UiResult};
use crate::style::SliderStyle;
use crate::widget::{Bar, Slider, SliderType, Widget, WidgetId, WidgetTree};

/// Initial state of a slider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Lower bound.
    pub min: i16,
    /// Upper bound.
    pub max: i16,
    /// Main knob value.
    pub value: i16,
    /// Left knob value (range sliders).
    pub left_value: i16,
    /// Slider flavour.
    #[serde(rename = "type")]
    pub slider_type: SliderType,
    /// Animation duration in milliseconds.
    pub anim_time_ms: u16,
    /// Easing of animated changes.
    pub easing: Easing,
    /// Part styles.
    pub style: SliderStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: Bar::DEFAULT_MIN,
            max: Bar::DEFAULT_MAX,
            value: Bar::DEFAULT_MIN,
            left_value: Bar::DEFAULT_MIN,
            slider_type: SliderType::Normal,
            anim_time_ms: Bar::DEFAULT_ANIM_TIME_MS,
            easing: Easing::Linear,
            style: SliderStyle::default(),
        }
    }
}

impl SliderConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`UiError::ConfigParse`] for malformed TOML or unknown keys,
    /// [`UiError::InvalidConfig`] if the values fail [`Self::validate`].
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| UiError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`UiError::ConfigIo`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| UiError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that the configured values describe a reachable slider state.
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> UiResult<()> {
        if self.min > self.max {
            return Err(UiError::InvalidConfig(format!(
                "min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        for (key, value) in [("value", self.value), ("left_value", self.left_value)] {
            if !(self.min..=self.max).contains(&value) {
                return Err(UiError::InvalidConfig(format!(
                    "{key} ({value}) is outside [{}, {}]",
                    self.min, self.max
                )));
            }
        }
        if self.slider_type == SliderType::Range && self.left_value > self.value {
            return Err(UiError::InvalidConfig(format!(
                "left_value ({}) is greater than value ({}) on a range slider",
                self.left_value, self.value
            )));
        }
        let padding = self.style.knob_padding;
        if !padding.is_finite() || padding < 0.0 {
            return Err(UiError::InvalidConfig(format!(
                "style.knob_padding ({padding}) must be a finite, non-negative number"
            )));
        }
        Ok(())
    }

    /// Writes this configuration into an existing slider, without animation.
    pub fn apply(&self, slider: &mut Slider) {
        slider.set_range(self.min, self.max);
        slider.set_anim_time(self.anim_time_ms);
        slider.bar_mut().set_easing(self.easing);
        slider.set_style(self.style.clone());
        slider.set_type(self.slider_type);
        slider.set_value(self.value, false);
        slider.set_left_value(self.left_value, false);
    }
}

impl Slider {
    /// Creates a slider in `tree` and configures it.
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidConfig`] if the configuration fails validation,
    /// [`UiError::WidgetNotFound`] if `parent` is not in the tree. Nothing is
    /// registered in the tree when validation fails.
    pub fn from_config(tree: &mut WidgetTree, parent: Option<WidgetId>, config: &SliderConfig) -> UiResult<Self> {
        config.validate()?;
        let mut slider = Self::create(tree, parent)?;
        config.apply(&mut slider);

        tracing::debug!(
            "Slider {} configured: {:?} [{}, {}]",
            slider.bar().state().id.raw(),
            config.slider_type,
            config.min,
            config.max
        );
        Ok(slider)
    }
}
