//! Full editing flows: open, mutate, regenerate, reopen.

use momento_editor::{Mutation, SessionStore};
use momento_model::{ActivityData, BlockKind, ColumnSide, Layout};

#[test]
fn edit_flow_regenerates_after_every_mutation() {
    let mut store = SessionStore::new();
    let session = store.open_new("p-1", "m-1", Layout::Equal).unwrap();

    session
        .apply(Mutation::InsertBlock {
            column: ColumnSide::Left,
            index: 0,
            kind: BlockKind::Heading {
                text: "Bienvenidos".to_string(),
                subtitle: String::new(),
            },
        })
        .unwrap();

    let artifact = session.artifact();
    assert_eq!(artifact.html.matches("col-12 col-lg-6").count(), 2);
    assert!(artifact.html.contains("<h1>Bienvenidos</h1>"));

    session
        .apply(Mutation::SetLayout {
            layout: Layout::LeftMajor,
        })
        .unwrap();
    assert!(session.artifact().html.contains("col-12 col-lg-7"));
}

#[test]
fn activity_edits_swap_the_attached_runtime() {
    let mut store = SessionStore::new();
    let session = store.open_new("p-1", "m-1", Layout::Equal).unwrap();

    session
        .apply(Mutation::InsertBlock {
            column: ColumnSide::Left,
            index: 0,
            kind: BlockKind::Activity {
                data: ActivityData::empty(momento_model::ActivityKind::SelectText),
            },
        })
        .unwrap();
    // Empty activity: markup only, no runtime.
    assert!(session.artifact().js.is_empty());

    let block_id = session.document.left[0].id.clone();
    session
        .apply(Mutation::SetActivityData {
            block_id,
            data: ActivityData::SelectText {
                text: "Hola {{}} mundo".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                answers: vec![0],
            },
        })
        .unwrap();

    let artifact = session.artifact();
    assert!(artifact.js.contains("var respuestasCorrectas = [\"1\"];"));
    assert!(artifact.css.contains(".select-text-actividad"));
}

#[test]
fn reopen_recovers_blocks_and_layout() {
    let mut store = SessionStore::new();
    let session = store.open_new("p-1", "m-1", Layout::LeftMinor).unwrap();
    session
        .apply(Mutation::InsertBlock {
            column: ColumnSide::Left,
            index: 0,
            kind: BlockKind::Instruction {
                text: "Lee con atención".to_string(),
            },
        })
        .unwrap();
    let persisted = session.artifact().html.clone();
    store.close("p-1", "m-1").unwrap();

    let reopened = store.open_persisted("p-1", "m-1", &persisted).unwrap();
    assert_eq!(reopened.document.layout, Layout::LeftMinor);
    assert_eq!(reopened.document.left.len(), 1);
    assert!(matches!(
        &reopened.document.left[0].kind,
        BlockKind::Instruction { text } if text == "Lee con atención"
    ));
}

#[test]
fn abandoning_a_session_leaves_nothing_behind() {
    let mut store = SessionStore::new();
    {
        let session = store.open_new("p-1", "m-1", Layout::Equal).unwrap();
        session
            .apply(Mutation::InsertBlock {
                column: ColumnSide::Left,
                index: 0,
                kind: BlockKind::Table,
            })
            .unwrap();
    }
    // Close without saving: the in-memory model is simply dropped.
    store.close("p-1", "m-1").unwrap();
    assert_eq!(store.open_count(), 0);

    // A fresh session starts empty.
    let session = store.open_new("p-1", "m-1", Layout::Equal).unwrap();
    assert!(session.document.left.is_empty());
}

#[test]
fn sessions_for_different_moments_are_independent() {
    let mut store = SessionStore::new();
    store.open_new("p-1", "m-1", Layout::Equal).unwrap();
    store.open_new("p-2", "m-1", Layout::Cover).unwrap();

    let a = store.get_mut("p-1", "m-1").unwrap();
    a.apply(Mutation::InsertBlock {
        column: ColumnSide::Left,
        index: 0,
        kind: BlockKind::Button {
            label: "Seguir".to_string(),
        },
    })
    .unwrap();

    let b = store.get_mut("p-2", "m-1").unwrap();
    assert!(b.document.left.is_empty());
    assert!(b.artifact().html.contains("momento-portada"));
}
