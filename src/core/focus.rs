//! Shared focus-holder slot.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::component::{ComponentId, ComponentRc, WeakComponent};

struct FocusEntry {
    id: ComponentId,
    component: WeakComponent,
}

/// Read access to the screen's focus holder.
///
/// The screen owns the writing side; widgets that draw a focus indicator or need to follow
/// focus (scroll containers) keep a clone. Holding a handle never keeps the holder alive.
#[derive(Clone, Default)]
pub struct FocusHandle {
    slot: Rc<RefCell<Option<FocusEntry>>>,
}

impl FocusHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of the focus holder, if any.
    pub fn id(&self) -> Option<ComponentId> {
        self.slot.borrow().as_ref().map(|entry| entry.id)
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.id() == Some(id)
    }

    /// Upgraded handle to the focus holder. `None` when unset or when every owner dropped it.
    pub fn component(&self) -> Option<ComponentRc> {
        self.slot
            .borrow()
            .as_ref()
            .and_then(|entry| entry.component.upgrade())
    }

    pub(crate) fn set(&self, id: ComponentId, component: &ComponentRc) {
        *self.slot.borrow_mut() = Some(FocusEntry {
            id,
            component: Rc::downgrade(component),
        });
    }

    pub(crate) fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::FocusHandle;
    use crate::core::component::{Component, ComponentRc};
    use crate::widgets::button::Button;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn clones_share_the_slot() {
        let focus = FocusHandle::new();
        let reader = focus.clone();
        let button: ComponentRc = Rc::new(RefCell::new(Button::new("OK")));
        let id = button.borrow().id();

        assert_eq!(reader.id(), None);
        focus.set(id, &button);
        assert!(reader.is_focused(id));
        assert!(reader.component().is_some());

        focus.clear();
        assert_eq!(reader.id(), None);
    }

    #[test]
    fn handle_does_not_keep_holder_alive() {
        let focus = FocusHandle::new();
        let button: ComponentRc = Rc::new(RefCell::new(Button::new("OK")));
        let id = button.borrow().id();
        focus.set(id, &button);
        drop(button);

        assert_eq!(focus.id(), Some(id));
        assert!(focus.component().is_none());
    }
}
