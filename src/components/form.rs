//! Product form view: create and edit.
//!
//! The form follows the view coordinator. Entering edit mode loads the targeted
//! product's fields, entering create mode resets to a blank product. Submitting
//! writes through the repository and returns the coordinator to browse mode.

use crate::core::{
    error::{InventoryError, Result},
    observable::Subscription,
    product::{check_price, NewProduct, Product, ProductPatch},
    repository::ProductRepository,
    storage::Storage,
    view_state::{ViewCoordinator, ViewMode, ViewState},
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct FormState {
    data: NewProduct,
    editing_id: Option<String>,
}

pub struct ProductFormView<S: Storage + 'static> {
    repository: Rc<ProductRepository<S>>,
    coordinator: Rc<ViewCoordinator>,
    state: Rc<RefCell<FormState>>,
    _subscription: Subscription<ViewState>,
}

impl<S: Storage + 'static> ProductFormView<S> {
    pub fn new(repository: Rc<ProductRepository<S>>, coordinator: Rc<ViewCoordinator>) -> Self {
        let state = Rc::new(RefCell::new(FormState::default()));

        let sink = Rc::clone(&state);
        let lookup = Rc::clone(&repository);
        let subscription = coordinator.subscribe(move |view| {
            let mut state = sink.borrow_mut();
            match (view.mode, view.target_id.as_deref()) {
                (ViewMode::Edit, Some(id)) => {
                    match lookup.get_by_id(id) {
                        Some(product) => state.data = product.to_fields(),
                        None => log::warn!("Product {id} not found, form left unchanged"),
                    }
                    state.editing_id = Some(id.to_string());
                }
                (ViewMode::Create, _) => *state = FormState::default(),
                _ => {}
            }
        });

        Self {
            repository,
            coordinator,
            state,
            _subscription: subscription,
        }
    }

    /// Current field values
    pub fn data(&self) -> NewProduct {
        self.state.borrow().data.clone()
    }

    /// Change field values in place
    pub fn edit(&self, f: impl FnOnce(&mut NewProduct)) {
        f(&mut self.state.borrow_mut().data);
    }

    pub fn is_edit_mode(&self) -> bool {
        self.coordinator.current().mode == ViewMode::Edit
            && self.state.borrow().editing_id.is_some()
    }

    pub fn editing_id(&self) -> Option<String> {
        self.state.borrow().editing_id.clone()
    }

    /// Check the current field values, first failure wins
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.state.borrow().data)
    }

    /// Validate and save, then go back to browse mode.
    ///
    /// In edit mode the whole form is sent as the update; an id that vanished
    /// meanwhile is [`InventoryError::ProductNotFound`] and the mode stays.
    pub fn submit(&self) -> Result<Product> {
        self.validate()?;
        let data = self.data();

        let saved = if self.is_edit_mode() {
            let id = self.editing_id().unwrap_or_default();
            self.repository
                .update(&id, ProductPatch::from(data))?
                .ok_or_else(|| InventoryError::product_not_found(id))?
        } else {
            self.repository.create(data)?
        };

        log::debug!("Saved product {}", saved.id);
        self.coordinator.set_mode(ViewMode::Browse, None);
        Ok(saved)
    }

    pub fn cancel(&self) {
        self.coordinator.set_mode(ViewMode::Browse, None);
    }
}

fn validate_fields(data: &NewProduct) -> Result<()> {
    if data.name.trim().is_empty() {
        return Err(InventoryError::invalid_field("name", "is required"));
    }
    if data.description.trim().is_empty() {
        return Err(InventoryError::invalid_field("description", "is required"));
    }
    check_price(data.price)?;
    if data.category.trim().is_empty() {
        return Err(InventoryError::invalid_field("category", "is required"));
    }
    Ok(())
}
