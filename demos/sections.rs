//! Sections Demo: Draws a register dump sized to the current terminal.
//!
//! Demonstrates:
//! - Section headers with the right-hand margin
//! - Grid tables aligning rows of differing length
//! - Flow tables wrapping and centering uniform cells

use sectional::{Cell, Console, FlowTable, GridTable, Row, Section, Table, Terminal, Widget};

fn registers() -> GridTable {
    [
        ("rax", "0x0000000000000000", ""),
        ("rbx", "0x00007fffffffe3a8", "→ stack"),
        ("rip", "0x0000000000401126", "<main+4>"),
        ("eflags", "0x246", ""),
    ]
    .into_iter()
    .map(|(name, value, note)| Row::from_cells([Cell::new(name), Cell::new(value), Cell::new(note)]))
    .collect()
}

fn flags() -> FlowTable {
    ["CF", "PF", "AF", "ZF", "SF", "TF", "IF", "DF", "OF"]
        .into_iter()
        .map(Cell::new)
        .collect()
}

fn main() -> std::io::Result<()> {
    let mut console = Console::new();
    let width = console.width();

    let mut section = Section::titled("Registers");
    section.add_component(registers());
    section.add_component(Table::from(flags()));

    let mut stack = Section::titled("Stack");
    stack.add_component(Table::from(
        ["0x00", "0x08", "0x10", "0x18"]
            .into_iter()
            .map(Cell::new)
            .collect::<FlowTable>(),
    ));

    for widget in [&section, &stack] {
        match widget.check(&console, width) {
            Ok(()) => widget.draw(&mut console, width),
            Err(e) => console.write(&format!("terminal too narrow: {e}\n")),
        }
    }

    console.flush()
}
