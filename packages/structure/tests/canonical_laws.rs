//! Law-level tests for the canonicalizer and projection builder
//!
//! This tests:
//! - unwrap as a fixed point and idempotent rewrite
//! - unwrap ∘ inflate recovering the flat sequence
//! - the never-empty guarantee
//! - projection agreement with the inflated grouping

use slugline_document::{Document, Node, NodeKind};
use slugline_structure::{build_projection, inflate_document, unwrap_document, ProjectionEntry};

fn screenplay() -> Document {
    Document::from_nodes(vec![
        Node::new(NodeKind::SceneHeading, "s1").with_text("INT. STATION - NIGHT"),
        Node::new(NodeKind::Action, "a1").with_text("A train pulls in."),
        Node::new(NodeKind::Character, "c1").with_text("MARA"),
        Node::new(NodeKind::Parenthetical, "p1").with_text("(checking her watch)"),
        Node::new(NodeKind::Dialogue, "d1").with_text("Right on time."),
        Node::new(NodeKind::Dialogue, "d2").with_text("For once."),
        Node::new(NodeKind::Transition, "t1").with_text("CUT TO:"),
        Node::new(NodeKind::Character, "c2").with_text("GUARD"),
        Node::new(NodeKind::General, "g1").with_text("Draft note."),
    ])
}

#[test]
fn test_unwrap_is_fixed_point_on_flat_input() {
    let doc = screenplay();
    assert_eq!(unwrap_document(&doc), doc);
}

#[test]
fn test_unwrap_is_idempotent() {
    let nested = inflate_document(&screenplay());
    let once = unwrap_document(&nested);
    let twice = unwrap_document(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_unwrap_inflate_round_trip_preserves_flat_sequence() {
    let doc = screenplay();
    let round_tripped = unwrap_document(&inflate_document(&doc));
    assert_eq!(round_tripped, doc);
}

#[test]
fn test_inflate_is_stable_over_its_own_output() {
    let nested = inflate_document(&screenplay());
    assert_eq!(inflate_document(&nested), nested);
}

#[test]
fn test_inflate_output_has_no_top_level_speech() {
    let nested = inflate_document(&screenplay());

    for node in &nested.children {
        // Every character and speech segment is inside a composite now
        assert!(!matches!(
            node.kind,
            NodeKind::Character | NodeKind::Dialogue | NodeKind::Parenthetical
        ));
        if node.kind == NodeKind::DialogueBlock {
            assert_eq!(node.children.len(), 2);
            assert_eq!(node.children[0].kind, NodeKind::Character);
            assert_eq!(node.children[1].kind, NodeKind::SpeechFlow);
        }
    }
}

#[test]
fn test_unwrap_output_is_entirely_flat() {
    let nested = inflate_document(&screenplay());
    let flat = unwrap_document(&nested);

    fn assert_flat(nodes: &[Node]) {
        for node in nodes {
            assert!(node.kind.is_flat(), "composite survived unwrap: {:?}", node.kind);
            assert_flat(&node.children);
        }
    }
    assert_flat(&flat.children);
}

#[test]
fn test_empty_document_unwraps_to_single_general() {
    let flat = unwrap_document(&Document::from_nodes(vec![]));
    assert_eq!(flat.kinds(), vec![NodeKind::General]);
    assert!(flat.children[0].runs.is_empty());
}

#[test]
fn test_projection_matches_inflated_grouping() {
    let doc = screenplay();
    let entries = build_projection(&doc);
    let nested = inflate_document(&doc);

    // Each projection entry corresponds to one top-level node of the
    // inflated form, in the same order.
    assert_eq!(entries.len(), nested.children.len());
    for (entry, inflated) in entries.iter().zip(&nested.children) {
        match entry {
            ProjectionEntry::Block { node, .. } => assert_eq!(node.kind, inflated.kind),
            ProjectionEntry::DialogueGroup { character, segments, .. } => {
                assert_eq!(inflated.kind, NodeKind::DialogueBlock);
                assert_eq!(character.id, inflated.children[0].id);
                let speech = &inflated.children[1];
                assert_eq!(segments.len(), speech.children.len());
                for (seg, wrapped) in segments.iter().zip(&speech.children) {
                    assert_eq!(seg.id, wrapped.id);
                }
            }
        }
    }
}

#[test]
fn test_speech_after_non_speech_starts_no_group() {
    // Action breaks the run: the dialogue after it is orphaned and must not
    // attach to the earlier character.
    let doc = Document::from_nodes(vec![
        Node::new(NodeKind::Character, "c1").with_text("MARA"),
        Node::new(NodeKind::Dialogue, "d1").with_text("First."),
        Node::new(NodeKind::Action, "a1").with_text("Beat."),
        Node::new(NodeKind::Dialogue, "d2").with_text("Orphaned."),
    ]);

    let entries = build_projection(&doc);
    assert_eq!(entries.len(), 3);
    match &entries[0] {
        ProjectionEntry::DialogueGroup { segments, .. } => assert_eq!(segments.len(), 1),
        other => panic!("expected dialogue group, got {other:?}"),
    }
    assert!(matches!(entries[2], ProjectionEntry::Block { index: 3, .. }));

    let nested = inflate_document(&doc);
    assert_eq!(
        nested.kinds(),
        vec![NodeKind::DialogueBlock, NodeKind::Action, NodeKind::Dialogue]
    );
}

#[test]
fn test_attrs_survive_both_rewrites() {
    let doc = Document::from_nodes(vec![
        Node::new(NodeKind::Character, "c1")
            .with_text("MARA")
            .with_attr("dual", serde_json::json!(true)),
        Node::new(NodeKind::Dialogue, "d1")
            .with_text("Hi.")
            .with_attr("revision", serde_json::json!(3)),
    ]);

    let round_tripped = unwrap_document(&inflate_document(&doc));
    assert_eq!(round_tripped, doc);
    assert_eq!(round_tripped.children[0].attrs["dual"], serde_json::json!(true));
    assert_eq!(round_tripped.children[1].attrs["revision"], serde_json::json!(3));
}
