use std::cell::RefCell;
use std::rc::Rc;

use charcell_ui::{
    Button, CharacterSet, Checkbox, Component, EnvConfig, InputEvent, Label, List, MemoryDisplay,
    Screen, TextField, CHECKMARK, CHECKMARK_SLOT,
};
use pretty_assertions::assert_eq;

fn shared<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

fn screen(columns: u8, rows: u8) -> Screen<MemoryDisplay> {
    Screen::with_config(
        MemoryDisplay::new(columns, rows),
        columns,
        rows,
        &EnvConfig::default(),
    )
}

fn step(screen: &mut Screen<MemoryDisplay>, event: InputEvent) {
    screen.display_mut().push_input(event);
    screen.update();
}

#[test]
fn confirm_dialog_focus_and_press() {
    let mut screen = screen(16, 2);
    let ok = shared(Button::new("OK"));
    let cancel = shared(Button::new("Cancel"));
    screen.add(shared(Label::new("Confirm?")), 0, 0);
    screen.add(ok.clone(), 0, 1);
    screen.add(cancel.clone(), 6, 1);

    screen.update();
    assert_eq!(
        screen.display().snapshot(),
        vec!["Confirm?        ", "<OK>  [Cancel]  "]
    );

    step(&mut screen, InputEvent::scroll(1));
    assert_eq!(screen.display().row_text(1), "[OK]  <Cancel>  ");
    assert!(!cancel.borrow().pressed());

    step(&mut screen, InputEvent::select());
    assert!(cancel.borrow().pressed());
    assert!(!ok.borrow().pressed());
    assert!(!screen.is_captured());

    screen.update();
    assert!(!cancel.borrow().pressed());
}

#[test]
fn list_selection_captures_and_commits() {
    let mut screen = screen(16, 2);
    let list = shared(List::new(3));
    for item in ["A", "B", "C"] {
        list.borrow_mut().add_item(item).expect("list has room");
    }
    let go = shared(Button::new("Go"));
    screen.add(list.clone(), 0, 0);
    screen.add(go.clone(), 0, 1);

    screen.update();
    assert_eq!(screen.display().row_text(0), "<A>             ");

    step(&mut screen, InputEvent::select());
    assert!(screen.is_captured());
    assert_eq!(screen.display().row_text(0), ">A<             ");

    step(&mut screen, InputEvent::scroll(1));
    assert_eq!(screen.display().row_text(0), ">B<             ");
    assert_eq!(screen.focus_holder_id(), Some(list.borrow().id()));

    step(&mut screen, InputEvent::select());
    assert!(!screen.is_captured());
    assert_eq!(list.borrow().selected_item(), Some("B"));
    assert_eq!(screen.display().row_text(0), "<B>             ");

    step(&mut screen, InputEvent::scroll(1));
    assert_eq!(screen.focus_holder_id(), Some(go.borrow().id()));
    assert_eq!(screen.display().snapshot(), vec!["[B]             ", "<Go>            "]);
}

#[test]
fn cancel_restores_the_committed_list_item() {
    let mut screen = screen(16, 1);
    let list = shared(List::new(3));
    for item in ["A", "B", "C"] {
        list.borrow_mut().add_item(item).expect("list has room");
    }
    screen.add(list.clone(), 0, 0);
    screen.update();

    step(&mut screen, InputEvent::select());
    step(&mut screen, InputEvent::scroll(2));
    assert_eq!(list.borrow().selected_item(), Some("C"));

    step(&mut screen, InputEvent::cancel());
    assert!(!screen.is_captured());
    assert_eq!(list.borrow().selected_item(), Some("A"));
    assert_eq!(screen.display().row_text(0), "<A>             ");
}

#[test]
fn display_is_cleared_once_and_fully_painted_twice() {
    let mut screen = screen(16, 2);
    screen.add(shared(Label::new("Status")), 0, 0);
    screen.add(shared(Button::new("OK")), 0, 1);

    screen.update();
    let first = screen.display_mut().take_draws();
    screen.update();
    let second = screen.display_mut().take_draws();
    screen.update();
    let third = screen.display_mut().take_draws();

    assert_eq!(screen.display().clear_count(), 1);
    assert_eq!(first, second);
    assert!(third.is_empty());
}

#[test]
fn checkbox_toggles_with_reserved_glyph() {
    let mut screen = screen(16, 1);
    let checkbox = shared(Checkbox::new());
    screen.add(checkbox.clone(), 2, 0);
    assert_eq!(screen.display().glyph(CHECKMARK_SLOT), Some(CHECKMARK));

    screen.update();
    assert_eq!(screen.display().row_text(0), "  < >           ");

    step(&mut screen, InputEvent::select());
    assert!(checkbox.borrow().checked());
    assert!(!screen.is_captured());
    assert_eq!(screen.display().row_text(0), "  <*>           ");

    step(&mut screen, InputEvent::select());
    assert!(!checkbox.borrow().checked());
    assert_eq!(screen.display().row_text(0), "  < >           ");
}

#[test]
fn text_field_edit_session() {
    let mut screen = screen(16, 2);
    let field = shared(TextField::new("abc", CharacterSet::printable_ascii()));
    screen.add(field.clone(), 0, 0);
    screen.update();

    step(&mut screen, InputEvent::select());
    assert!(screen.is_captured());
    assert_eq!(screen.display().cursor(), (1, 0));
    assert!(screen.display().blink());

    step(&mut screen, InputEvent::select());
    assert!(screen.display().cursor_visible());
    step(&mut screen, InputEvent::scroll(1));
    assert_eq!(field.borrow().text(), "bbc");
    assert_eq!(screen.display().row_text(0), ">bbc<           ");

    step(&mut screen, InputEvent::select());
    step(&mut screen, InputEvent::scroll(5));
    assert!(!screen.is_captured());
    assert_eq!(field.borrow().text(), "bbc");
    assert_eq!(screen.display().row_text(0), "<bbc>           ");
}

#[test]
fn screen_without_focusable_components_ignores_input() {
    let mut screen = screen(16, 1);
    screen.add(shared(Label::new("Idle")), 0, 0);
    screen.update();

    step(&mut screen, InputEvent::scroll(1));
    step(&mut screen, InputEvent::select());
    assert_eq!(screen.focus_holder_id(), None);
    assert!(!screen.is_captured());
    assert_eq!(screen.display().row_text(0), "Idle            ");
}
