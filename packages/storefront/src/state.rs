//! The view state of the product detail page and the reducer that drives it.
//!
//! Every change to what the page shows goes through [`ViewState::reduce`]. The fetch lifecycle and the
//! quantity counter are two independent machines that happen to share one record:
//!
//! ```text
//! Initial --FetchStarted--> InProgress --Loaded--> Success
//!                                      \-Failed--> Failure
//! ```
//!
//! `Increment` and `Decrement` are accepted in every status.

use std::fmt::Display;
use std::num::NonZeroU32;

use crate::api::{FailureReason, ProductDetails, ProductRecord};

/// Which view the page renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Initial,
    InProgress,
    Success,
    Failure,
}

/// A purchase count that never drops below one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Steps down by one, staying at one when already there.
    pub fn decrement(self) -> Self {
        NonZeroU32::new(self.0.get() - 1).map_or(self, Self)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug)]
pub enum Action {
    FetchStarted,
    Loaded(ProductDetails),
    Failed(FailureReason),
    Increment,
    Decrement,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub status: FetchStatus,
    pub product: Option<ProductRecord>,
    pub similar_products: Vec<ProductRecord>,
    pub failure: Option<FailureReason>,
    pub quantity: Quantity,
}

impl ViewState {
    /// The state a freshly mounted page starts in: the fetch is about to be issued.
    pub fn loading() -> Self {
        let mut state = Self::default();
        state.reduce(Action::FetchStarted);
        state
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::FetchStarted if self.status == FetchStatus::Initial => {
                self.status = FetchStatus::InProgress;
            }
            Action::Loaded(details) if self.status == FetchStatus::InProgress => {
                tracing::debug!(
                    product = details.product.id,
                    similar = details.similar_products.len(),
                    "product loaded"
                );
                self.product = Some(details.product);
                self.similar_products = details.similar_products;
                self.status = FetchStatus::Success;
            }
            Action::Failed(reason) if self.status == FetchStatus::InProgress => {
                tracing::debug!(?reason, "product failed to load");
                self.failure = Some(reason);
                self.status = FetchStatus::Failure;
            }
            Action::Increment => self.quantity = self.quantity.increment(),
            Action::Decrement => self.quantity = self.quantity.decrement(),
            action => {
                tracing::debug!(?action, status = ?self.status, "ignoring fetch action");
            }
        }
    }
}
