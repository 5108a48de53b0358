//! Scripted settings menu on a 16x4 in-memory display.
//!
//! Run with `CHARCELL_DEBUG=1` to write the dispatch trace to `charcell-debug.log`.

use std::cell::RefCell;
use std::rc::Rc;

use charcell_ui::{
    Button, CharacterSet, Checkbox, InputEvent, Label, List, MemoryDisplay, Screen,
    ScrollContainer, TextField, WidgetError,
};

fn main() -> Result<(), WidgetError> {
    let mut screen = Screen::new(MemoryDisplay::new(16, 4), 16, 4);

    let mode = Rc::new(RefCell::new(List::new(3)));
    for item in ["Auto", "Heat", "Cool"] {
        mode.borrow_mut().add_item(item)?;
    }
    let setpoint = Rc::new(RefCell::new(TextField::new("21", CharacterSet::digits())));
    let fan = Rc::new(RefCell::new(Checkbox::new()));
    let save = Rc::new(RefCell::new(Button::new("Save")));

    let mut settings = ScrollContainer::new(screen.focus_handle(), 16, 2);
    settings.add(Rc::new(RefCell::new(Label::new("Mode"))), 0, 0);
    settings.add(mode.clone(), 6, 0);
    settings.add(Rc::new(RefCell::new(Label::new("Temp"))), 0, 1);
    settings.add(setpoint.clone(), 6, 1);
    settings.add(Rc::new(RefCell::new(Label::new("Fan"))), 0, 2);
    settings.add(fan.clone(), 6, 2);

    screen.add(Rc::new(RefCell::new(Label::new("Thermostat"))), 0, 0);
    screen.add(Rc::new(RefCell::new(settings)), 0, 1);
    screen.add(save.clone(), 0, 3);

    let script = [
        InputEvent::select(),
        InputEvent::scroll(1),
        InputEvent::select(),
        InputEvent::scroll(1),
        InputEvent::select(),
        InputEvent::select(),
        InputEvent::scroll(2),
        InputEvent::select(),
        InputEvent::scroll(5),
        InputEvent::scroll(1),
        InputEvent::select(),
        InputEvent::scroll(1),
        InputEvent::select(),
    ];

    screen.update();
    for event in script {
        screen.display_mut().push_input(event);
        screen.update();
        println!("tick {}", screen.tick());
        for row in screen.display().snapshot() {
            println!("|{row}|");
        }
        if save.borrow().pressed() {
            println!(
                "saved: mode={} setpoint={} fan={}",
                mode.borrow().selected_item().unwrap_or("-"),
                setpoint.borrow().text(),
                fan.borrow().checked()
            );
        }
    }
    Ok(())
}
