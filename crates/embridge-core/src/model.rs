use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stable identifier for a block.
pub type BlockId = String;

/// The id of the document's layout entry point.
pub const ROOT_ID: &str = "root";

/// Default presentational values for a synthesized layout root.
pub const DEFAULT_BACKDROP_COLOR: &str = "#F5F5F5";
pub const DEFAULT_CANVAS_COLOR: &str = "#FFFFFF";
pub const DEFAULT_TEXT_COLOR: &str = "#262626";

/// A document as a flat id → block mapping, rooted at [`ROOT_ID`].
///
/// The mapping carries no insertion order; rendering order lives in the
/// `childrenIds` sequences of container blocks. Using a `BTreeMap` keeps
/// serialization deterministic regardless of how the map was built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub blocks: BTreeMap<BlockId, Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layout block at [`ROOT_ID`], if present.
    pub fn root(&self) -> Option<&Block> {
        self.blocks.get(ROOT_ID)
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Ordered child ids of a container-like block, or `None` for leaves
    /// and missing ids.
    pub fn children_of(&self, id: &str) -> Option<&[BlockId]> {
        self.blocks.get(id).and_then(Block::children)
    }
}

/// One typed node of the document tree.
///
/// Wire shape is adjacent-tagged: `{"type": "Text", "data": {...}}`.
/// The layout variant carries its presentational fields directly; every
/// other variant splits into `style` + `props`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Block {
    EmailLayout(EmailLayoutProps),
    Container(BlockData<ContainerProps>),
    Text(BlockData<TextProps>),
    Heading(BlockData<HeadingProps>),
    Image(BlockData<ImageProps>),
    Button(BlockData<ButtonProps>),
    Divider(BlockData<DividerProps>),
    Html(BlockData<HtmlProps>),
}

impl Block {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Block::EmailLayout(_) => "EmailLayout",
            Block::Container(_) => "Container",
            Block::Text(_) => "Text",
            Block::Heading(_) => "Heading",
            Block::Image(_) => "Image",
            Block::Button(_) => "Button",
            Block::Divider(_) => "Divider",
            Block::Html(_) => "Html",
        }
    }

    /// Ordered child ids for container-like blocks, `None` for leaves.
    pub fn children(&self) -> Option<&[BlockId]> {
        match self {
            Block::EmailLayout(layout) => Some(&layout.children_ids),
            Block::Container(data) => Some(&data.props.children_ids),
            _ => None,
        }
    }
}

/// Shared `style` + `props` payload of every non-layout block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData<P> {
    #[serde(default)]
    pub style: Style,
    pub props: P,
}

/// Presentational properties. Absent fields mean "unset", not zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Pixel value, already stripped of its unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        self == &Style::default()
    }
}

/// Four-sided padding record in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        self.top == 0 && self.bottom == 0 && self.left == 0 && self.right == 0
    }
}

/// Layout root payload. `font_family` is a named key (see
/// `embridge-fonts`), kept as a string because incoming documents may
/// carry keys we do not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLayoutProps {
    pub backdrop_color: String,
    pub canvas_color: String,
    pub text_color: String,
    pub font_family: String,
    pub children_ids: Vec<BlockId>,
}

impl Default for EmailLayoutProps {
    fn default() -> Self {
        Self {
            backdrop_color: DEFAULT_BACKDROP_COLOR.to_string(),
            canvas_color: DEFAULT_CANVAS_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            font_family: embridge_fonts::DEFAULT_FAMILY.as_key().to_string(),
            children_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProps {
    pub children_ids: Vec<BlockId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingProps {
    pub text: String,
    pub level: HeadingLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    #[serde(rename = "h1")]
    H1,
    #[serde(rename = "h2")]
    H2,
    #[serde(rename = "h3")]
    H3,
}

impl HeadingLevel {
    pub const fn as_tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "h1" => HeadingLevel::H1,
            "h2" => HeadingLevel::H2,
            "h3" => HeadingLevel::H3,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub url: String,
    pub alt: String,
    /// Always serialized (as `null` when absent): an image without a
    /// surrounding link is a meaningful state, not a missing field.
    pub link_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonProps {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DividerProps {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlProps {
    /// Raw, unparsed markup carried verbatim.
    pub contents: String,
}
