use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::text::TextRun;

/// Block-level node kinds.
///
/// The seven flat kinds are the editable screenplay blocks. `DialogueBlock`
/// and `SpeechFlow` are composite wrappers that only exist in the nested
/// form produced by inflation; a flat document never contains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    /// Generic text block. `paragraph` is the same kind under its other
    /// consumers' spelling; both parse to this variant.
    #[serde(alias = "paragraph")]
    General,
    DialogueBlock,
    SpeechFlow,
}

impl NodeKind {
    /// The kinds a flat document may contain at top level.
    pub const FLAT: [NodeKind; 7] = [
        NodeKind::SceneHeading,
        NodeKind::Action,
        NodeKind::Character,
        NodeKind::Dialogue,
        NodeKind::Parenthetical,
        NodeKind::Transition,
        NodeKind::General,
    ];

    /// Membership in the seven-entry flat set.
    pub fn is_flat(self) -> bool {
        !matches!(self, NodeKind::DialogueBlock | NodeKind::SpeechFlow)
    }

    /// Whether this kind is a speech segment — the kinds a dialogue group
    /// carries after its `character`.
    pub fn is_speech(self) -> bool {
        matches!(self, NodeKind::Dialogue | NodeKind::Parenthetical)
    }

    /// Parse a wire name. Accepts the `paragraph` spelling for `general`;
    /// any other name is rejected rather than coerced.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        match name {
            "sceneHeading" => Some(NodeKind::SceneHeading),
            "action" => Some(NodeKind::Action),
            "character" => Some(NodeKind::Character),
            "dialogue" => Some(NodeKind::Dialogue),
            "parenthetical" => Some(NodeKind::Parenthetical),
            "transition" => Some(NodeKind::Transition),
            "general" | "paragraph" => Some(NodeKind::General),
            "dialogueBlock" => Some(NodeKind::DialogueBlock),
            "speechFlow" => Some(NodeKind::SpeechFlow),
            _ => None,
        }
    }

    /// Canonical wire name.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::SceneHeading => "sceneHeading",
            NodeKind::Action => "action",
            NodeKind::Character => "character",
            NodeKind::Dialogue => "dialogue",
            NodeKind::Parenthetical => "parenthetical",
            NodeKind::Transition => "transition",
            NodeKind::General => "general",
            NodeKind::DialogueBlock => "dialogueBlock",
            NodeKind::SpeechFlow => "speechFlow",
        }
    }
}

/// A typed content block.
///
/// Flat nodes own inline text runs and no children; composite nodes own
/// children and no runs. `attrs` carries consumer-defined attributes and is
/// preserved verbatim by every transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable id, minted by an [`crate::id::IdGenerator`]. Missing ids on
    /// inbound documents deserialize to an empty string rather than failing.
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type")]
    pub kind: NodeKind,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attrs: HashMap<String, serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<TextRun>,

    #[serde(default, alias = "content", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            attrs: HashMap::new(),
            runs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an unmarked run of text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.runs.push(TextRun::plain(text));
        self
    }

    pub fn with_run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Recursive concatenation of all inline text: own runs first, then
    /// children in order.
    pub fn collect_text(&self) -> String {
        let mut out = String::new();
        self.collect_text_into(&mut out);
        out
    }

    fn collect_text_into(&self, out: &mut String) {
        for run in &self.runs {
            out.push_str(&run.text);
        }
        for child in &self.children {
            child.collect_text_into(out);
        }
    }

    /// Byte length of the node's concatenated text.
    pub fn text_len(&self) -> usize {
        self.runs.iter().map(|run| run.text.len()).sum::<usize>()
            + self.children.iter().map(Node::text_len).sum::<usize>()
    }
}

/// The flat editing document: an ordered sequence of top-level nodes.
///
/// Owned exclusively by the editing surface and mutated only through editor
/// transactions. Invariant: never zero top-level children — a fresh document
/// starts as a single empty `general` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, alias = "content")]
    pub children: Vec<Node>,
}

impl Document {
    /// A fresh single-block document.
    pub fn new(ids: &mut crate::id::IdGenerator) -> Self {
        Self {
            children: vec![Node::new(NodeKind::General, ids.new_id())],
        }
    }

    /// Build from an explicit top-level node list.
    pub fn from_nodes(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Top-level kinds in order, mostly useful in assertions.
    pub fn kinds(&self) -> Vec<NodeKind> {
        self.children.iter().map(|node| node.kind).collect()
    }
}
