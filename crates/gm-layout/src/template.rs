//! Built-in default layout.

use gm_config::LayoutConfig;

use crate::item::LayoutItem;

/// Resume template used when nothing is persisted.
///
/// Keys follow the configured prefix and separator, so the template stays
/// loadable under any valid [`LayoutConfig`].
#[must_use]
pub fn default_layout(config: &LayoutConfig) -> Vec<LayoutItem> {
    let cells: [(&str, i64, i64, u32, u32); 7] = [
        ("[-C]# Jane Doe", 0, 0, 12, 2),
        ("[-C]jane@example.com · +1 555 0100 · github.com/jane", 0, 2, 12, 1),
        ("**`---`**", 0, 3, 12, 1),
        (
            "## Experience\n\n**Senior Engineer**, Acme Corp\n\n- Built ==grid layouts== for print\n- Cut render time by ++40%++",
            0,
            4,
            8,
            5,
        ),
        ("+++", 8, 4, 1, 5),
        ("[+S]## Skills\n\n- Rust\n- TypeScript\n- SQL", 9, 4, 3, 5),
        ("[-E][+E]*References on request*", 0, 9, 12, 1),
    ];

    cells
        .into_iter()
        .zip(0..)
        .map(|((value, x, y, w, h), ordinal)| {
            LayoutItem::generate(config.key_for(ordinal), config)
                .with_value(value)
                .at(x, y)
                .sized(w, h)
        })
        .collect()
}
