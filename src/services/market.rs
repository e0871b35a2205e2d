//! Simulated market price check

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// The price every market lookup reports
pub const BEST_AVAILABLE_PRICE: Money = Money::from_minor(2_499_000);

/// Spinner caption while the lookup "runs"
pub const PRICE_CHECK_CAPTION: &str = "Analyzing market data...";

/// Result of a price check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuote {
    pub product: String,
    pub best_price: Money,
}

impl MarketQuote {
    /// Message shown to the user
    pub fn message(&self, symbol: &str) -> String {
        format!(
            "Best available price for {}: {}",
            self.product,
            self.best_price.format_whole(symbol)
        )
    }
}

/// Answers "what are you buying?" with a fixed quote
#[derive(Debug, Default, Clone, Copy)]
pub struct MarketService;

impl MarketService {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, product: &str) -> ExpenseResult<MarketQuote> {
        let product = product.trim();
        if product.is_empty() {
            return Err(ExpenseError::Validation(
                "Tell me what you are buying first".into(),
            ));
        }

        info!(product, "market price check");
        Ok(MarketQuote {
            product: product.to_string(),
            best_price: BEST_AVAILABLE_PRICE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_message() {
        let quote = MarketService::new().check(" Noise-cancelling headphones ").unwrap();
        assert_eq!(
            quote.message("₹"),
            "Best available price for Noise-cancelling headphones: ₹24,990"
        );
    }

    #[test]
    fn test_empty_product() {
        assert!(MarketService::new().check("  ").unwrap_err().is_validation());
    }
}
