//! # Inventory Session
//!
//! Page-level state for one inventory view: the product collection, the current filter
//! criteria, the selection and whether the create form is open.
//!
//! Every intent takes `&mut self` and runs to completion, so a read of the visible list
//! always sees the latest applied mutation. After each intent the session recomputes the
//! visible list and reconciles the selection, returning the [`SessionEvent`]s describing
//! what changed.

use crate::error::Result;
use crate::filter::{visible, FilterCriteria, SortMode};
use crate::gateway::{self, ClockIds, IdSource};
use crate::model::{Product, ProductDraft, ProductId};
use crate::selection::SelectionState;

/// User intents, as emitted by a view.
#[derive(Debug, Clone)]
pub enum Intent {
    Select(ProductId),
    ChangeFilter(FilterCriteria),
    Clear,
    OpenCreateForm,
    CloseCreateForm,
    Create(ProductDraft),
}

/// Changes observable by the embedding view.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SelectionChanged(Option<ProductId>),
    VisibleListChanged(Vec<ProductId>),
    ProductCreated(Product),
}

pub struct InventorySession<I: IdSource = ClockIds> {
    products: Vec<Product>,
    criteria: FilterCriteria,
    default_sort: SortMode,
    selection: SelectionState,
    visible_ids: Vec<ProductId>,
    create_form_open: bool,
    ids: I,
}

impl InventorySession<ClockIds> {
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_ids(products, ClockIds::new())
    }
}

impl<I: IdSource> InventorySession<I> {
    pub fn with_ids(products: Vec<Product>, ids: I) -> Self {
        let selection = SelectionState::initialize(&products);
        let criteria = FilterCriteria::default();
        let visible_ids = ids_of(&visible(&products, &criteria));
        Self {
            products,
            criteria,
            default_sort: SortMode::default(),
            selection,
            visible_ids,
            create_form_open: false,
            ids,
        }
    }

    /// Sort mode that a fresh session, and every `Clear`, starts from.
    pub fn with_default_sort(mut self, sort: SortMode) -> Self {
        self.default_sort = sort;
        self.criteria.sort = sort;
        self.visible_ids = ids_of(&visible(&self.products, &self.criteria));
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible(&self) -> Vec<&Product> {
        visible(&self.products, &self.criteria)
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selection.resolve(&self.products)
    }

    pub fn is_create_form_open(&self) -> bool {
        self.create_form_open
    }

    /// Applies one intent. Only a refused `Select` or a rejected `Create` returns an
    /// error, and in both cases nothing about the session changed.
    pub fn apply(&mut self, intent: Intent) -> Result<Vec<SessionEvent>> {
        match intent {
            Intent::Select(id) => self.select(id),
            Intent::ChangeFilter(criteria) => Ok(self.change_filter(criteria)),
            Intent::Clear => Ok(self.clear()),
            Intent::OpenCreateForm => {
                self.create_form_open = true;
                Ok(Vec::new())
            }
            Intent::CloseCreateForm => {
                self.create_form_open = false;
                Ok(Vec::new())
            }
            Intent::Create(draft) => self.create(&draft).map(|(_, events)| events),
        }
    }

    pub fn select(&mut self, id: ProductId) -> Result<Vec<SessionEvent>> {
        let before = self.selection.active();
        self.selection.select(id, &self.products)?;
        Ok(self.settle(before, None))
    }

    pub fn change_filter(&mut self, criteria: FilterCriteria) -> Vec<SessionEvent> {
        let before = self.selection.active();
        self.criteria = criteria;
        self.settle(before, None)
    }

    pub fn clear(&mut self) -> Vec<SessionEvent> {
        let before = self.selection.active();
        self.criteria.clear(self.default_sort);
        self.settle(before, None)
    }

    /// Runs the draft through the gateway. On success the new product is selected and the
    /// create form closes; on rejection the form stays as it was.
    pub fn create(&mut self, draft: &ProductDraft) -> Result<(Product, Vec<SessionEvent>)> {
        let before = self.selection.active();
        let created = gateway::add(&self.products, draft, &mut self.ids).map_err(|err| {
            tracing::debug!(error = %err, "create rejected");
            err
        })?;

        self.products = created.products;
        self.create_form_open = false;

        let mut events = vec![SessionEvent::ProductCreated(created.product.clone())];
        events.extend(self.settle(before, Some(created.product.id)));
        Ok((created.product, events))
    }

    fn settle(&mut self, before: Option<ProductId>, created: Option<ProductId>) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        let visible_ids = ids_of(&visible(&self.products, &self.criteria));
        if visible_ids != self.visible_ids {
            self.visible_ids = visible_ids.clone();
            events.push(SessionEvent::VisibleListChanged(visible_ids));
        }

        self.selection.reconcile(&self.products, created);
        let after = self.selection.active();
        if after != before {
            tracing::debug!(?before, ?after, "selection changed");
            events.push(SessionEvent::SelectionChanged(after));
        }

        events
    }
}

fn ids_of(list: &[&Product]) -> Vec<ProductId> {
    list.iter().map(|p| p.id).collect()
}
