//! Product list view: the browse screen.
//!
//! The view subscribes to the repository when it is built and keeps its own
//! copy of the latest snapshot together with the active [`ProductFilter`] and
//! the filtered projection. Both are recomputed on every snapshot and on every
//! filter change, so `filtered()` is always current.

use crate::core::{
    error::Result,
    filter::ProductFilter,
    observable::Subscription,
    product::Product,
    repository::ProductRepository,
    storage::Storage,
    view_state::{ViewCoordinator, ViewMode},
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct ListState {
    products: Vec<Product>,
    filter: ProductFilter,
    filtered: Vec<Product>,
}

impl ListState {
    fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.products);
    }
}

pub struct ProductListView<S: Storage> {
    repository: Rc<ProductRepository<S>>,
    coordinator: Rc<ViewCoordinator>,
    state: Rc<RefCell<ListState>>,
    _subscription: Subscription<Vec<Product>>,
}

impl<S: Storage> ProductListView<S> {
    pub fn new(repository: Rc<ProductRepository<S>>, coordinator: Rc<ViewCoordinator>) -> Self {
        let state = Rc::new(RefCell::new(ListState::default()));

        let sink = Rc::clone(&state);
        let subscription = repository.subscribe(move |products| {
            let mut state = sink.borrow_mut();
            state.products = products.clone();
            state.refilter();
        });

        Self {
            repository,
            coordinator,
            state,
            _subscription: subscription,
        }
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.state.borrow_mut();
        state.filter.search_term = term.into();
        state.refilter();
    }

    pub fn set_category(&self, category: Option<String>) {
        let mut state = self.state.borrow_mut();
        state.filter.category = category;
        state.refilter();
    }

    pub fn clear_filters(&self) {
        let mut state = self.state.borrow_mut();
        state.filter.clear();
        state.refilter();
    }

    pub fn filter(&self) -> ProductFilter {
        self.state.borrow().filter.clone()
    }

    /// Every product, in collection order
    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.clone()
    }

    /// Products passing the current filter, in collection order
    pub fn filtered(&self) -> Vec<Product> {
        self.state.borrow().filtered.clone()
    }

    /// 1-based collection position of each filtered product
    pub fn numbered(&self) -> Vec<(usize, Product)> {
        let state = self.state.borrow();
        state
            .products
            .iter()
            .enumerate()
            .filter(|(_, product)| state.filter.matches(product))
            .map(|(index, product)| (index + 1, product.clone()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.state.borrow().products.len()
    }

    pub fn shown(&self) -> usize {
        self.state.borrow().filtered.len()
    }

    /// e.g. "2 of 3 products"
    pub fn results_summary(&self) -> String {
        format!("{} of {} products", self.shown(), self.total())
    }

    pub fn on_add_product(&self) {
        self.coordinator.set_mode(ViewMode::Create, None);
    }

    pub fn on_edit_product(&self, id: &str) {
        self.coordinator
            .set_mode(ViewMode::Edit, Some(id.to_string()));
    }

    /// Ask `confirm` about the product and delete it if it agrees.
    ///
    /// Returns `Ok(false)` when the product is unknown or the deletion was
    /// declined.
    pub fn on_delete_product<F>(&self, id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&Product) -> bool,
    {
        let product = self
            .state
            .borrow()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned();

        match product {
            Some(product) if confirm(&product) => self.repository.delete(id),
            Some(product) => {
                log::debug!("Deletion of {} declined", product.id);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    pub fn on_seed_data(&self) -> Result<Vec<Product>> {
        self.repository.seed_sample_data()
    }
}
