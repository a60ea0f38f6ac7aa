use futures::executor::block_on;

use common::catalog::{Catalog, DeleteMode, PostBoard};
use common::model::{Comment, Post, PostDraft, Product, RecordId};
use common::source::{BoardSources, BoardWrite, DataSource, InMemoryDataSource};
use common::{CatalogError, Intent};

type Sources = BoardSources<InMemoryDataSource<Post>, InMemoryDataSource<Comment>>;

fn post(id: &str, title: &str) -> Post {
    Post {
        id: RecordId::from(id),
        title: title.into(),
        views: 0,
        is_deleted: false,
    }
}

fn sources() -> Sources {
    BoardSources {
        posts: InMemoryDataSource::new(vec![post("1", "Alpha"), post("2", "Beta")]),
        comments: InMemoryDataSource::default(),
    }
}

fn reload(board: &mut PostBoard, sources: &Sources) -> Result<(), CatalogError> {
    let (posts, comments) = block_on(sources.fetch())?;
    board.load(posts, comments);
    Ok(())
}

/// Sends `write`, then settles the board and reloads it, as the client does.
fn submit(board: &mut PostBoard, sources: &Sources, write: BoardWrite) -> Result<(), CatalogError> {
    block_on(sources.apply(&write))?;
    write.settle(board);
    reload(board, sources)
}

fn loaded() -> (PostBoard, Sources) {
    let sources = sources();
    let mut board = PostBoard::default();
    reload(&mut board, &sources).unwrap();
    (board, sources)
}

#[test]
fn create_writes_then_reloads() {
    let (mut board, sources) = loaded();

    let write = BoardWrite::create_post(
        &board,
        &PostDraft {
            title: "Gamma".into(),
            views: 4,
        },
    )
    .unwrap();
    assert!(matches!(&write, BoardWrite::CreatePost(p) if p.id == RecordId::from("3")));
    assert_eq!(board.posts().store().len(), 2);

    submit(&mut board, &sources, write).unwrap();
    assert_eq!(sources.posts.snapshot().len(), 3);
    assert_eq!(board.posts().store().len(), 3);
    assert_eq!(sources.posts.fetches(), 2);
}

#[test]
fn failed_write_leaves_local_state_untouched() {
    let (mut board, sources) = loaded();
    board.posts_mut().begin_edit(&RecordId::from("1")).unwrap();

    sources.posts.set_fail_writes(true);
    let write = BoardWrite::save_post(
        &board,
        &PostDraft {
            title: "Changed".into(),
            views: 0,
        },
    )
    .unwrap();
    let err = submit(&mut board, &sources, write).unwrap_err();

    assert!(matches!(err, CatalogError::Mutation(_)));
    assert_eq!(board.posts().get(&RecordId::from("1")).unwrap().title, "Alpha");
    assert!(board.posts().edit_session().is_editing(&RecordId::from("1")));
    assert_eq!(sources.posts.fetches(), 1);
}

#[test]
fn saved_edit_closes_the_form_after_the_reload() {
    let (mut board, sources) = loaded();
    board.posts_mut().begin_edit(&RecordId::from("1")).unwrap();

    let write = BoardWrite::save_post(
        &board,
        &PostDraft {
            title: "Changed".into(),
            views: 9,
        },
    )
    .unwrap();
    submit(&mut board, &sources, write).unwrap();

    let saved = board.posts().get(&RecordId::from("1")).unwrap();
    assert_eq!((saved.title.as_str(), saved.views), ("Changed", 9));
    assert!(board.posts().edit_session().target().is_none());
}

#[test]
fn validation_fails_before_touching_the_source() {
    let (board, sources) = loaded();

    let err = BoardWrite::create_post(&board, &PostDraft::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
    assert_eq!(sources.posts.snapshot().len(), 2);
    assert_eq!(sources.posts.fetches(), 1);
}

#[test]
fn soft_delete_and_restore_write_only_the_flag() {
    let (mut board, sources) = loaded();
    let id = RecordId::from("2");

    let delete = BoardWrite::delete_post(&board, &id).unwrap().unwrap();
    submit(&mut board, &sources, delete).unwrap();
    assert!(sources.posts.snapshot()[1].is_deleted);
    assert_eq!(sources.posts.snapshot()[1].title, "Beta");
    assert!(board.posts().get(&id).unwrap().is_deleted);

    let restore = BoardWrite::restore_post(&board, &id).unwrap().unwrap();
    submit(&mut board, &sources, restore).unwrap();
    assert!(!board.posts().get(&id).unwrap().is_deleted);
}

#[test]
fn deleting_a_flagged_post_sends_nothing() {
    let (mut board, sources) = loaded();
    let id = RecordId::from("2");
    let delete = BoardWrite::delete_post(&board, &id).unwrap().unwrap();
    submit(&mut board, &sources, delete).unwrap();
    let fetches = sources.posts.fetches();

    assert_eq!(BoardWrite::delete_post(&board, &id), Ok(None));
    assert_eq!(sources.posts.fetches(), fetches);
    assert!(matches!(
        BoardWrite::delete_post(&board, &RecordId::from("9")),
        Err(CatalogError::NotFound { .. })
    ));
}

#[test]
fn failed_load_keeps_previous_records() {
    let (mut board, sources) = loaded();

    sources.comments.set_fail_fetch(true);
    let err = reload(&mut board, &sources).unwrap_err();
    assert!(matches!(err, CatalogError::Load(_)));
    assert_eq!(board.posts().store().len(), 2);
}

#[test]
fn comment_flows_reload_the_whole_board() {
    let (mut board, sources) = loaded();
    let post_id = RecordId::from("1");

    let missing = BoardWrite::add_comment(&board, &RecordId::from("9"), "hello");
    assert!(matches!(missing, Err(CatalogError::NotFound { .. })));
    assert!(sources.comments.snapshot().is_empty());

    let write = BoardWrite::add_comment(&board, &post_id, "first!").unwrap();
    submit(&mut board, &sources, write).unwrap();
    assert_eq!(board.active_comment_count(&post_id), 1);
    let id = sources.comments.snapshot()[0].id.clone();

    board.begin_comment_edit(&id).unwrap();
    let save = BoardWrite::save_comment(&board, "edited").unwrap();
    submit(&mut board, &sources, save).unwrap();
    assert_eq!(sources.comments.snapshot()[0].text, "edited");
    assert!(board.comment_edit_session().target().is_none());

    board.begin_comment_edit(&id).unwrap();
    let flag = BoardWrite::flag_comment(&board, &id, true).unwrap().unwrap();
    submit(&mut board, &sources, flag).unwrap();
    assert_eq!(board.active_comment_count(&post_id), 0);
    assert!(board.comment_edit_session().target().is_none());
    assert_eq!(BoardWrite::flag_comment(&board, &id, true), Ok(None));

    let restore = BoardWrite::flag_comment(&board, &id, false).unwrap().unwrap();
    submit(&mut board, &sources, restore).unwrap();
    assert_eq!(board.active_comment_count(&post_id), 1);
}

#[test]
fn hard_delete_is_session_local() {
    let source = InMemoryDataSource::new(vec![Product {
        id: RecordId::Int(1),
        name: "Mug".into(),
        description: "Blue".into(),
        price: 4.0,
        image: String::new(),
        is_deleted: None,
    }]);
    let mut catalog: Catalog<Product> = Catalog::new(DeleteMode::Hard);
    catalog.load(block_on(source.fetch_all()).unwrap());

    catalog
        .dispatch(Intent::Delete {
            id: RecordId::from(1),
            confirmed: true,
        })
        .unwrap();
    assert!(catalog.store().is_empty());
    assert_eq!(source.snapshot().len(), 1);

    catalog.load(block_on(source.fetch_all()).unwrap());
    assert_eq!(catalog.store().len(), 1);
}
