//! Builds a small data table with an expansion row and a list box, mounts
//! them, simulates hovering the expansion row, and prints the markup.
//!
//! Run with `cargo run -p trellis --example expandable_table`.

use simplelog::LevelFilter;
use trellis::logging::init_file_logger;
use trellis::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize file logging
    if let Err(e) = init_file_logger("expandable_table.log", LevelFilter::Debug) {
        eprintln!("Logging disabled: {e}");
    }

    let cx = TrellisConfig::from_json_str(r#"{ "validation": "warn" }"#)?.into_context()?;

    let mut doc = Document::new();
    let table = doc.mount(Element::table());
    let body = doc.mount_into(table, Element::tbody())?;

    let toggle_row = Element::tr()
        .child(Element::td().text("Load balancer 1"))
        .child(Element::td().text("Active"))
        .child(Element::td().text("Round robin"));
    let expansion = ExpandableRow::new(3)
        .child(Element::span().text("Health checks pass on all 4 targets."))
        .render(&cx);

    let parent = doc.mount_into(body, toggle_row)?;
    let expansion = doc.mount_into(body, expansion)?;

    doc.dispatch(expansion, EventKind::MouseEnter);
    println!("hovered:\n{}\n", doc.to_html(table));
    doc.dispatch(expansion, EventKind::MouseLeave);
    println!(
        "parent classes after leave: {:?}\n",
        doc.class_list(parent).map(ToString::to_string)
    );

    let menu_ref = NodeRef::new();
    let list_box = Element::div()
        .child(
            FieldContainer::new()
                .tab_index(1)
                .aria("haspopup", "listbox")
                .aria("expanded", "true")
                .child("Choose a protocol")
                .render(&cx),
        )
        .child(
            MenuContainer::new("protocol-menu")
                .node_ref(menu_ref.clone())
                .item(MenuItem::labeled("HTTP").active(true))
                .item(MenuItem::labeled("HTTPS").highlighted(true))
                .item(MenuItem::labeled("TCP"))
                .render(&cx),
        );
    doc.mount(list_box);

    println!("menu mounted at {:?}", menu_ref.get());
    if let Some(menu) = menu_ref.get() {
        println!("{}", doc.to_html(menu));
    }
    Ok(())
}
