//! Read-only single-record view.

use std::sync::Arc;

use crate::framework::RestEntity;
use crate::nav::Navigator;

/// Displays one record obtained via route data.
pub struct DetailView<T: RestEntity> {
    navigator: Arc<dyn Navigator>,
    pub record: Option<T>,
}

impl<T: RestEntity> DetailView<T> {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            record: None,
        }
    }

    /// Binds the resolved record. `None` means the resolver redirected and
    /// this view has nothing to show.
    pub fn on_init(&mut self, route_data: Option<T>) {
        self.record = route_data;
    }

    /// Returns to the previous view.
    pub fn previous_state(&self) {
        self.navigator.back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{NavEvent, RecordingNavigator};
    use crate::model::Customer;

    #[test]
    fn binds_route_data_and_navigates_back() {
        let navigator = Arc::new(RecordingNavigator::new());
        let mut view: DetailView<Customer> =
            DetailView::new(navigator.clone() as Arc<dyn Navigator>);

        let customer = Customer {
            id: Some(3),
            ..Customer::new("Ada", "555-0100")
        };
        view.on_init(Some(customer.clone()));
        assert_eq!(view.record, Some(customer));

        view.previous_state();
        assert_eq!(navigator.events(), vec![NavEvent::Back]);
    }
}
