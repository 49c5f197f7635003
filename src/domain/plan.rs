//! Pricing plan domain model
//!
//! `current_price` is derived state. It is recomputed inside the only two
//! mutation paths ([`PricingPlan::apply_discount`] and [`PricingPlan::reprice`])
//! and cannot be set by callers.

use super::errors::WhatsFlowError;
use super::ids::PlanId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// Maximum length of a plan name
pub const MAX_PLAN_NAME_LEN: usize = 50;

/// Maximum length of a checkout link
pub const MAX_CHECKOUT_URL_LEN: usize = 200;

/// Clamp a requested discount into `0..=100`
///
/// Out-of-range requests are clamped silently, never rejected.
pub fn clamp_discount(percent: i64) -> u8 {
    percent.clamp(0, 100) as u8
}

/// Price after discount, in native floating point
///
/// Rounding is a presentation concern; see [`format_price`].
pub fn discounted_price(base_price: f64, discount_percent: u8) -> f64 {
    base_price * (1.0 - f64::from(discount_percent) / 100.0)
}

/// Formats a price for display with two decimals
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Fields that define a plan before the store assigns an identifier
///
/// Also used by stores to rehydrate persisted rows; the derived price is
/// always recomputed from these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDefinition {
    /// Unique plan name (e.g. "Starter")
    pub plan_name: String,

    /// Undiscounted monthly price
    pub base_price: f64,

    /// Requested discount; clamped into 0..=100
    pub discount_percent: i64,

    /// Ordered feature bullet points
    pub features: Vec<String>,

    /// Highlighted on the public pricing page
    pub is_featured: bool,

    /// External checkout link
    pub checkout_url: Option<String>,
}

impl PlanDefinition {
    /// Strips surrounding whitespace from the plan name
    ///
    /// Stores call this before validating and comparing names, so `" Pro"`
    /// and `"Pro"` are the same plan.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.plan_name.trim();
        if trimmed.len() != self.plan_name.len() {
            self.plan_name = trimmed.to_string();
        }
        self
    }

    /// Validates a definition before insert
    ///
    /// # Errors
    ///
    /// Returns [`WhatsFlowError::Validation`] for a blank or overlong name, a
    /// negative or non-finite base price, or a checkout link that is not an
    /// absolute http(s) URL.
    pub fn validate(&self) -> Result<(), WhatsFlowError> {
        let name = self.plan_name.trim();
        if name.is_empty() {
            return Err(WhatsFlowError::Validation(
                "plan_name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_PLAN_NAME_LEN {
            return Err(WhatsFlowError::Validation(format!(
                "plan_name must be at most {MAX_PLAN_NAME_LEN} characters"
            )));
        }
        validate_base_price(self.base_price)?;
        if let Some(link) = &self.checkout_url {
            validate_checkout_url(link)?;
        }
        Ok(())
    }
}

/// One subscription tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    id: PlanId,
    plan_name: String,
    base_price: f64,
    current_price: f64,
    discount_percent: u8,
    features: Vec<String>,
    is_featured: bool,
    checkout_url: Option<String>,
    updated_at: DateTime<Utc>,
}

impl PricingPlan {
    /// Assembles a plan, clamping the discount and deriving the current price
    pub fn new(id: PlanId, definition: PlanDefinition, updated_at: DateTime<Utc>) -> Self {
        let discount_percent = clamp_discount(definition.discount_percent);
        Self {
            id,
            plan_name: definition.plan_name,
            base_price: definition.base_price,
            current_price: discounted_price(definition.base_price, discount_percent),
            discount_percent,
            features: definition.features,
            is_featured: definition.is_featured,
            checkout_url: definition.checkout_url,
            updated_at,
        }
    }

    /// Applies a discount to the current base price
    ///
    /// `percent` is clamped into `0..=100`; the current price is recomputed and
    /// the update timestamp stamped with `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use whatsflow::domain::{PlanDefinition, PlanId, PricingPlan};
    /// use chrono::Utc;
    ///
    /// let mut plan = PricingPlan::new(
    ///     PlanId::new(1).unwrap(),
    ///     PlanDefinition {
    ///         plan_name: "Pro".to_string(),
    ///         base_price: 125.0,
    ///         discount_percent: 0,
    ///         features: vec![],
    ///         is_featured: true,
    ///         checkout_url: None,
    ///     },
    ///     Utc::now(),
    /// );
    /// plan.apply_discount(20, Utc::now());
    /// assert_eq!(plan.current_price(), 100.0);
    ///
    /// plan.apply_discount(250, Utc::now());
    /// assert_eq!(plan.discount_percent(), 100);
    /// assert_eq!(plan.current_price(), 0.0);
    /// ```
    pub fn apply_discount(&mut self, percent: i64, now: DateTime<Utc>) {
        self.discount_percent = clamp_discount(percent);
        self.current_price = discounted_price(self.base_price, self.discount_percent);
        self.updated_at = now;
    }

    /// Sets a new base price (when given) and then applies `percent`
    ///
    /// # Errors
    ///
    /// Returns [`WhatsFlowError::Validation`] if the new base price is negative
    /// or not finite. The plan is left untouched in that case.
    pub fn reprice(
        &mut self,
        base_price: Option<f64>,
        percent: i64,
        now: DateTime<Utc>,
    ) -> Result<(), WhatsFlowError> {
        if let Some(price) = base_price {
            validate_base_price(price)?;
            self.base_price = price;
        }
        self.apply_discount(percent, now);
        Ok(())
    }

    /// Plan identifier
    pub fn id(&self) -> PlanId {
        self.id
    }

    /// Unique plan name
    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    /// Undiscounted price
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Derived price after discount
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Discount in percent, always within 0..=100
    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    /// Ordered feature list
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Highlighted plan flag
    pub fn is_featured(&self) -> bool {
        self.is_featured
    }

    /// Checkout link, if configured
    pub fn checkout_url(&self) -> Option<&str> {
        self.checkout_url.as_deref()
    }

    /// Timestamp of the last mutation
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// True when a discount is active
    pub fn is_discounted(&self) -> bool {
        self.discount_percent > 0
    }
}

fn validate_base_price(price: f64) -> Result<(), WhatsFlowError> {
    if !price.is_finite() || price < 0.0 {
        return Err(WhatsFlowError::Validation(format!(
            "base_price must be a non-negative amount, got {price}"
        )));
    }
    Ok(())
}

fn validate_checkout_url(link: &str) -> Result<(), WhatsFlowError> {
    if link.len() > MAX_CHECKOUT_URL_LEN {
        return Err(WhatsFlowError::Validation(format!(
            "checkout_url must be at most {MAX_CHECKOUT_URL_LEN} characters"
        )));
    }
    let parsed = Url::parse(link)
        .map_err(|e| WhatsFlowError::Validation(format!("Invalid checkout_url '{link}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(WhatsFlowError::Validation(format!(
            "checkout_url must use http or https, got '{other}'"
        ))),
    }
}
