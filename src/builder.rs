//! Builder: a director sequences construction steps on any builder without
//! knowing which concrete pizza is being assembled.

use crate::error::PatternError;
use crate::transcript::{Event, Transcript};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Product
// =============================================================================

/// Product under construction. Every field stays empty until its step runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pizza {
    dough: String,
    sauce: String,
    topping: String,
}

impl Pizza {
    pub fn set_dough(&mut self, dough: impl Into<String>) {
        self.dough = dough.into();
    }

    pub fn set_sauce(&mut self, sauce: impl Into<String>) {
        self.sauce = sauce.into();
    }

    pub fn set_topping(&mut self, topping: impl Into<String>) {
        self.topping = topping.into();
    }

    pub fn dough(&self) -> &str {
        &self.dough
    }

    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    pub fn topping(&self) -> &str {
        &self.topping
    }

    pub fn open(&self) -> Event {
        Event::PizzaOpened {
            dough: self.dough.clone(),
            sauce: self.sauce.clone(),
            topping: self.topping.clone(),
        }
    }
}

// =============================================================================
// Builder capability
// =============================================================================

/// Storage for the pizza a builder is working on. Only builders in this crate
/// can reach into it.
#[derive(Debug, Default)]
pub struct PizzaSlot(Option<Pizza>);

impl PizzaSlot {
    pub(crate) fn fresh(&mut self) {
        self.0 = Some(Pizza::default());
    }

    pub(crate) fn get(&self) -> Option<&Pizza> {
        self.0.as_ref()
    }

    pub(crate) fn take(&mut self) -> Option<Pizza> {
        self.0.take()
    }

    pub(crate) fn in_progress(&mut self) -> Result<&mut Pizza, PatternError> {
        self.0.as_mut().ok_or(PatternError::NotBuilt)
    }
}

mod sealed {
    use super::PizzaSlot;

    pub trait HoldsPizza {
        fn slot(&self) -> &PizzaSlot;
        fn slot_mut(&mut self) -> &mut PizzaSlot;
    }
}

/// Sealed: new pizzas come from [`Recipe`]s, not from outside implementations,
/// so nothing but the builder itself touches the product in progress.
pub trait PizzaBuilder: sealed::HoldsPizza {
    fn build_dough(&mut self) -> Result<(), PatternError>;
    fn build_sauce(&mut self) -> Result<(), PatternError>;
    fn build_topping(&mut self) -> Result<(), PatternError>;

    /// Discards any previous product and starts an empty one.
    fn create_new_pizza_product(&mut self) {
        self.slot_mut().fresh();
    }

    fn pizza(&self) -> Option<&Pizza> {
        self.slot().get()
    }

    fn take_pizza(&mut self) -> Option<Pizza> {
        self.slot_mut().take()
    }
}

#[derive(Debug, Default)]
pub struct HawaiianPizzaBuilder {
    slot: PizzaSlot,
}

impl sealed::HoldsPizza for HawaiianPizzaBuilder {
    fn slot(&self) -> &PizzaSlot {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut PizzaSlot {
        &mut self.slot
    }
}

impl PizzaBuilder for HawaiianPizzaBuilder {
    fn build_dough(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_dough("cross");
        Ok(())
    }

    fn build_sauce(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_sauce("mild");
        Ok(())
    }

    fn build_topping(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_topping("ham+pineapple");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SpicyPizzaBuilder {
    slot: PizzaSlot,
}

impl sealed::HoldsPizza for SpicyPizzaBuilder {
    fn slot(&self) -> &PizzaSlot {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut PizzaSlot {
        &mut self.slot
    }
}

impl PizzaBuilder for SpicyPizzaBuilder {
    fn build_dough(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_dough("pan baked");
        Ok(())
    }

    fn build_sauce(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_sauce("hot");
        Ok(())
    }

    fn build_topping(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_topping("pepperoni+salami");
        Ok(())
    }
}

/// A pizza described in configuration rather than in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub dough: String,
    pub sauce: String,
    pub topping: String,
}

#[derive(Debug)]
pub struct RecipePizzaBuilder {
    recipe: Recipe,
    slot: PizzaSlot,
}

impl RecipePizzaBuilder {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            slot: PizzaSlot::default(),
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }
}

impl sealed::HoldsPizza for RecipePizzaBuilder {
    fn slot(&self) -> &PizzaSlot {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut PizzaSlot {
        &mut self.slot
    }
}

impl PizzaBuilder for RecipePizzaBuilder {
    fn build_dough(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_dough(self.recipe.dough.as_str());
        Ok(())
    }

    fn build_sauce(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_sauce(self.recipe.sauce.as_str());
        Ok(())
    }

    fn build_topping(&mut self) -> Result<(), PatternError> {
        self.slot.in_progress()?.set_topping(self.recipe.topping.as_str());
        Ok(())
    }
}

// =============================================================================
// Director
// =============================================================================

#[derive(Default)]
pub struct Cook {
    builder: Option<Box<dyn PizzaBuilder>>,
}

impl Cook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the fixed recipe: fresh product, then dough, sauce, topping.
    /// The builder is kept only once all three steps succeed; on failure the
    /// cook still holds whatever it had before.
    pub fn make_pizza(&mut self, mut builder: Box<dyn PizzaBuilder>) -> Result<(), PatternError> {
        builder.create_new_pizza_product();
        builder.build_dough()?;
        builder.build_sauce()?;
        builder.build_topping()?;
        debug!(pizza = ?builder.pizza(), "pizza assembled");
        self.builder = Some(builder);
        Ok(())
    }

    pub fn open_pizza(&self, transcript: &mut Transcript) -> Result<&Pizza, PatternError> {
        let pizza = self.current()?;
        transcript.record(pizza.open());
        Ok(pizza)
    }

    /// Hands the finished pizza over; the cook has nothing to open afterwards.
    pub fn take_pizza(&mut self) -> Result<Pizza, PatternError> {
        self.builder
            .as_deref_mut()
            .and_then(|builder| builder.take_pizza())
            .ok_or(PatternError::NotBuilt)
    }

    pub fn builder(&self) -> Option<&dyn PizzaBuilder> {
        self.builder.as_deref()
    }

    fn current(&self) -> Result<&Pizza, PatternError> {
        self.builder
            .as_deref()
            .and_then(|builder| builder.pizza())
            .ok_or(PatternError::NotBuilt)
    }
}
