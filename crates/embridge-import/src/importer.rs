//! Heuristic HTML → Document importer.
//!
//! Used when incoming HTML carries no embedded metadata: a recursive,
//! depth-first, order-preserving walk maps a closed set of tags to
//! blocks. Unrecognized elements are dropped (their subtrees are not
//! traversed), and when nothing at all can be mapped the whole input is
//! preserved verbatim in a single passthrough block, so `import` is
//! total: it always returns a usable document.
//!
//! Only four facts per element are consumed: tag name, attributes, the
//! inline `style` attribute, and text content.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

use embridge_core::id::IdGenerator;
use embridge_core::model::{
    Block, BlockData, BlockId, ButtonProps, ContainerProps, DividerProps, Document,
    EmailLayoutProps, HeadingLevel, HeadingProps, HtmlProps, ImageProps, ROOT_ID, Style,
    TextProps,
};

use crate::style::extract_style;
use crate::telemetry::ImportReport;

/// Id of the terminal passthrough block.
pub const PASSTHROUGH_ID: &str = "html-block";

const ANCHOR_FALLBACK_TEXT: &str = "Click here";
const ANCHOR_FALLBACK_URL: &str = "#";

/// Import arbitrary HTML into a best-effort document.
pub fn import(html: &str) -> Document {
    import_with_report(html).0
}

/// Import arbitrary HTML, also returning per-call diagnostics.
///
/// Output ids are an implementation detail; the shape (block types,
/// nesting, ordering, property values) is reproducible for a given
/// input.
pub fn import_with_report(html: &str) -> (Document, ImportReport) {
    let mut walker = Walker::new();
    let tree = Html::parse_document(html);

    let mut children_ids: Vec<BlockId> = Vec::new();
    if let Some(body) = find_body(&tree) {
        let elements: Vec<ElementRef<'_>> = child_elements(body).collect();
        if elements.is_empty() {
            // No element children: feed the body itself through the
            // dispatcher (it falls through to the passthrough below).
            if let Some(id) = walker.process_element(body) {
                children_ids.push(id);
            }
        } else {
            for el in elements {
                if let Some(id) = walker.process_element(el) {
                    children_ids.push(id);
                }
            }
        }
    }

    if children_ids.is_empty() {
        walker.report.used_passthrough = true;
        walker.report.record_block("Html");
        walker
            .blocks
            .insert(PASSTHROUGH_ID.to_string(), passthrough_block(html));
        children_ids.push(PASSTHROUGH_ID.to_string());
    }

    let mut blocks = walker.blocks;
    blocks.insert(
        ROOT_ID.to_string(),
        Block::EmailLayout(EmailLayoutProps {
            children_ids,
            ..EmailLayoutProps::default()
        }),
    );

    (Document { blocks }, walker.report)
}

/// The terminal fallback document: a layout root holding one opaque
/// block that carries `html` verbatim.
pub fn passthrough_document(html: &str) -> Document {
    let mut blocks = BTreeMap::new();
    blocks.insert(PASSTHROUGH_ID.to_string(), passthrough_block(html));
    blocks.insert(
        ROOT_ID.to_string(),
        Block::EmailLayout(EmailLayoutProps {
            children_ids: vec![PASSTHROUGH_ID.to_string()],
            ..EmailLayoutProps::default()
        }),
    );
    Document { blocks }
}

fn passthrough_block(html: &str) -> Block {
    Block::Html(BlockData {
        style: Style::default(),
        props: HtmlProps {
            contents: html.to_string(),
        },
    })
}

/// Per-call traversal state: the blocks produced so far and the id
/// counter. Never outlives one import.
struct Walker {
    blocks: BTreeMap<BlockId, Block>,
    ids: IdGenerator,
    report: ImportReport,
}

impl Walker {
    fn new() -> Self {
        Self {
            blocks: BTreeMap::new(),
            ids: IdGenerator::new(),
            report: ImportReport::default(),
        }
    }

    /// Map one element to a block id, or `None` when it maps to
    /// nothing.
    fn process_element(&mut self, el: ElementRef<'_>) -> Option<BlockId> {
        self.report.elements_visited += 1;
        let id = self.dispatch(el);
        if id.is_none() {
            self.report.dropped_elements += 1;
        }
        id
    }

    /// Tag-driven mapping over a closed, exhaustively matched tag set.
    fn dispatch(&mut self, el: ElementRef<'_>) -> Option<BlockId> {
        let style = extract_style(el.value().attr("style"));
        let tag = el.value().name();

        match tag {
            "h1" | "h2" | "h3" => {
                let level = HeadingLevel::from_tag(tag)?;
                let text = trimmed_text(el);
                Some(self.insert(
                    "heading",
                    Block::Heading(BlockData {
                        style,
                        props: HeadingProps { text, level },
                    }),
                ))
            }

            "p" => {
                // Inner markup so inline formatting survives; plain
                // text only when there is no markup at all.
                let markup = el.inner_html();
                let text = if markup.is_empty() {
                    el.text().collect()
                } else {
                    markup
                };
                Some(self.insert(
                    "text",
                    Block::Text(BlockData {
                        style,
                        props: TextProps { text },
                    }),
                ))
            }

            "a" => {
                let mut text = trimmed_text(el);
                if text.is_empty() {
                    text = ANCHOR_FALLBACK_TEXT.to_string();
                }
                let url = el
                    .value()
                    .attr("href")
                    .filter(|href| !href.is_empty())
                    .unwrap_or(ANCHOR_FALLBACK_URL)
                    .to_string();
                Some(self.insert(
                    "button",
                    Block::Button(BlockData {
                        style,
                        props: ButtonProps { text, url },
                    }),
                ))
            }

            "img" => {
                let url = el.value().attr("src").unwrap_or_default().to_string();
                let alt = el.value().attr("alt").unwrap_or_default().to_string();
                Some(self.insert(
                    "image",
                    Block::Image(BlockData {
                        style,
                        props: ImageProps {
                            url,
                            alt,
                            // Surrounding-anchor detection is out of
                            // scope at import time.
                            link_href: None,
                        },
                    }),
                ))
            }

            "hr" => Some(self.insert(
                "divider",
                Block::Divider(BlockData {
                    style,
                    props: DividerProps {},
                }),
            )),

            "div" | "section" | "article" => {
                let mut child_ids: Vec<BlockId> = Vec::new();
                for child in child_elements(el) {
                    if let Some(id) = self.process_element(child) {
                        child_ids.push(id);
                    }
                }

                // Childless but with text: keep the text instead of
                // dropping the element.
                if child_ids.is_empty() {
                    let text = trimmed_text(el);
                    if !text.is_empty() {
                        child_ids.push(self.insert(
                            "text",
                            Block::Text(BlockData {
                                style: style.clone(),
                                props: TextProps { text },
                            }),
                        ));
                    }
                }

                if child_ids.is_empty() {
                    return None;
                }
                Some(self.insert(
                    "container",
                    Block::Container(BlockData {
                        style,
                        props: ContainerProps {
                            children_ids: child_ids,
                        },
                    }),
                ))
            }

            "table" => {
                // Cells at any nesting depth become a flat candidate
                // list, each fed back through the dispatcher.
                let mut cells: Vec<ElementRef<'_>> = Vec::new();
                collect_cells(el, &mut cells);

                let mut child_ids: Vec<BlockId> = Vec::new();
                for cell in cells {
                    if let Some(id) = self.process_element(cell) {
                        child_ids.push(id);
                    }
                }

                if child_ids.is_empty() {
                    return None;
                }
                Some(self.insert(
                    "container",
                    Block::Container(BlockData {
                        style,
                        props: ContainerProps {
                            children_ids: child_ids,
                        },
                    }),
                ))
            }

            // Unrecognized element: dropped, subtree not traversed.
            _ => None,
        }
    }

    fn insert(&mut self, prefix: &str, block: Block) -> BlockId {
        let id = self.ids.next_id(prefix);
        self.report.record_block(block.type_name());
        self.blocks.insert(id.clone(), block);
        id
    }
}

fn find_body(tree: &Html) -> Option<ElementRef<'_>> {
    child_elements(tree.root_element()).find(|el| el.value().name() == "body")
}

fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Depth-first `td`/`th` collection in document order, nested tables
/// included.
fn collect_cells<'a>(el: ElementRef<'a>, out: &mut Vec<ElementRef<'a>>) {
    for child in child_elements(el) {
        if matches!(child.value().name(), "td" | "th") {
            out.push(child);
        }
        collect_cells(child, out);
    }
}
