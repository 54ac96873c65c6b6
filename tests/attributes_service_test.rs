include!("tests_setup.rs");

use catalog_lib::errors::Error;

#[test]
fn test_list_attributes_in_insertion_order() {
    let ctx = create_catalog_service();
    let service = &ctx.service;

    let category = service.create_category(new_category("Shoes")).wait().unwrap();
    service
        .create_attribute(new_attribute(category.id, "Size", "size", "integer"))
        .wait()
        .unwrap();
    service
        .create_attribute(new_attribute(category.id, "Color", "color", "string"))
        .wait()
        .unwrap();
    service
        .create_attribute(new_attribute(category.id, "Waterproof", "waterproof", "boolean"))
        .wait()
        .unwrap();

    let attributes = service.list_attributes(category.id).wait().unwrap();
    let slugs = attributes.iter().map(|a| a.slug.as_str()).collect::<Vec<_>>();
    assert_eq!(slugs, vec!["size", "color", "waterproof"]);
    assert!(attributes.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[test]
fn test_list_attributes_scoped_to_category() {
    let ctx = create_catalog_service();
    let service = &ctx.service;

    let shoes = service.create_category(new_category("Shoes")).wait().unwrap();
    let phones = service.create_category(new_category("Phones")).wait().unwrap();
    service
        .create_attribute(new_attribute(shoes.id, "Size", "size", "integer"))
        .wait()
        .unwrap();
    service
        .create_attribute(new_attribute(phones.id, "Memory", "memory", "integer"))
        .wait()
        .unwrap();

    let attributes = service.list_attributes(phones.id).wait().unwrap();
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].slug, "memory");
}

#[test]
fn test_create_attribute_normalizes_data_type() {
    let ctx = create_catalog_service();
    let service = &ctx.service;

    let category = service.create_category(new_category("Shoes")).wait().unwrap();
    for (raw, expected) in vec![
        ("int", DataType::Integer),
        ("DOUBLE", DataType::Float),
        ("bool", DataType::Boolean),
        ("Json", DataType::Json),
        ("whatever", DataType::String),
        ("", DataType::String),
    ] {
        let slug = format!("slug_{}", raw.to_lowercase());
        let created = service
            .create_attribute(new_attribute(category.id, "Attr", &slug, raw))
            .wait()
            .unwrap();
        assert_eq!(created.data_type, expected, "input {:?}", raw);
    }

    let attributes = service.list_attributes(category.id).wait().unwrap();
    assert_eq!(attributes[0].data_type, DataType::Integer);
    assert_eq!(attributes[1].data_type, DataType::Float);
}

#[test]
fn test_create_attribute_with_blank_name_or_slug_fails() {
    let ctx = create_catalog_service();
    let service = &ctx.service;

    let category = service.create_category(new_category("Shoes")).wait().unwrap();
    for payload in vec![
        new_attribute(category.id, "", "size", "integer"),
        new_attribute(category.id, "Size", "  ", "integer"),
    ] {
        let err = service.create_attribute(payload).wait().err().unwrap();
        match err.downcast_ref::<Error>() {
            Some(Error::Validate(_)) => {}
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    assert!(service.list_attributes(category.id).wait().unwrap().is_empty());
}

#[test]
fn test_duplicate_slugs_are_allowed() {
    let ctx = create_catalog_service();
    let service = &ctx.service;

    let category = service.create_category(new_category("Shoes")).wait().unwrap();
    service
        .create_attribute(new_attribute(category.id, "Size", "size", "integer"))
        .wait()
        .unwrap();
    service
        .create_attribute(new_attribute(category.id, "Size EU", "size", "string"))
        .wait()
        .unwrap();

    let attributes = service.list_attributes(category.id).wait().unwrap();
    assert_eq!(attributes.len(), 2);
}
