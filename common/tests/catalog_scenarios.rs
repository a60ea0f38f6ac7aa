use common::catalog::{Catalog, DeleteMode, Intent, PageSize, PostBoard, SortKey};
use common::model::{Post, Product, ProductDraft, RecordId};
use common::CatalogError;

fn product(id: u64) -> Product {
    Product {
        id: RecordId::Int(id),
        name: format!("Product {}", id),
        description: format!("Description {}", id),
        price: 10.0 + id as f64,
        image: format!("img/{}.png", id),
        is_deleted: None,
    }
}

fn catalog_of(n: u64) -> Catalog<Product> {
    let mut catalog = Catalog::new(DeleteMode::Hard).with_page_size(PageSize::Ten);
    catalog.load((1..=n).map(product).collect());
    catalog
}

fn page_ids(catalog: &Catalog<Product>) -> Vec<u64> {
    catalog
        .snapshot()
        .items
        .iter()
        .filter_map(|p| p.id.numeric())
        .collect()
}

#[test]
fn deleting_the_last_page_clamps_back_to_page_one() {
    let mut catalog = catalog_of(12);
    catalog.go_to_page(2);
    assert_eq!(page_ids(&catalog), [11, 12]);

    catalog.delete(&RecordId::from(11), true).unwrap();
    catalog.delete(&RecordId::from(12), true).unwrap();

    let view = catalog.snapshot();
    assert_eq!(view.filtered_count, 10);
    assert_eq!((view.page, view.total_pages), (1, 1));
    assert_eq!(page_ids(&catalog), (1..=10).collect::<Vec<_>>());
}

#[test]
fn empty_filter_without_sort_is_store_order() {
    let mut catalog = catalog_of(4);
    catalog.set_filter("");
    catalog.set_sort(SortKey::None);
    assert_eq!(page_ids(&catalog), [1, 2, 3, 4]);
}

#[test]
fn create_with_empty_name_is_a_validation_error() {
    let mut catalog = catalog_of(3);
    let err = catalog
        .dispatch(Intent::Create(ProductDraft {
            name: String::new(),
            description: "Something".into(),
            price: 3.0,
            image: String::new(),
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
    assert_eq!(catalog.store().len(), 3);
}

#[test]
fn comment_on_unknown_post_is_not_found() {
    let mut board = PostBoard::default();
    board.load(
        vec![Post {
            id: RecordId::from("1"),
            title: "Only".into(),
            views: 0,
            is_deleted: false,
        }],
        Vec::new(),
    );
    let err = board.add_comment(&RecordId::from("99"), "hello").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
    assert_eq!(board.comments().len(), 0);
}

#[test]
fn page_never_exceeds_total_after_any_shrinking_step() {
    let mut catalog = catalog_of(37);
    catalog.set_page_size(PageSize::Five);
    catalog.go_to_page(8);

    let steps: Vec<Intent<ProductDraft>> = vec![
        Intent::Search("Product 3".into()),
        Intent::Search(String::new()),
        Intent::GoToPage(8),
        Intent::Delete {
            id: RecordId::from(37),
            confirmed: true,
        },
        Intent::Delete {
            id: RecordId::from(36),
            confirmed: true,
        },
        Intent::Search("description 1".into()),
        Intent::SetPageSize(PageSize::Fifty),
        Intent::NextPage,
    ];

    for intent in steps {
        catalog.dispatch(intent).unwrap();
        let view = catalog.snapshot();
        assert!(view.page >= 1 && view.page <= view.total_pages);
        assert!(view.items.len() <= view.page_size.get());
    }
}

#[test]
fn soft_deleted_records_stay_in_the_count() {
    let mut catalog: Catalog<Post> = Catalog::new(DeleteMode::Soft).with_page_size(PageSize::Five);
    catalog.load(
        (1..=6)
            .map(|id| Post {
                id: RecordId::Text(id.to_string()),
                title: format!("Post {}", id),
                views: id,
                is_deleted: false,
            })
            .collect(),
    );
    catalog.go_to_page(2);
    catalog.delete(&RecordId::from("6"), true).unwrap();

    let view = catalog.snapshot();
    assert_eq!(view.filtered_count, 6);
    assert_eq!(view.page, 2);
    assert!(view.offers_restore(view.items[0]));
}

#[test]
fn edits_can_move_a_record_out_of_the_filter() {
    let mut catalog = catalog_of(3);
    catalog.set_filter("product 2");
    assert_eq!(page_ids(&catalog), [2]);

    catalog.begin_edit(&RecordId::from(2)).unwrap();
    catalog
        .save_edit(&ProductDraft {
            name: "Renamed".into(),
            description: "Other".into(),
            price: 1.0,
            image: String::new(),
        })
        .unwrap();

    assert!(page_ids(&catalog).is_empty());
    assert!(catalog.snapshot().is_filtered_out());
}
