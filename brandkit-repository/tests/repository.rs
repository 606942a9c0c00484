mod common;

use brandkit_repository::{
    AdjectiveRepository, BrandRepository, PersonalityRepository, RuleRepository,
};
use common::{adjective, answers, rule, setup_db};

#[tokio::test]
async fn test_brand_create_and_rename() {
    let db = setup_db().await;
    assert!(BrandRepository::find_first(&db).await.unwrap().is_none());
    assert!(!BrandRepository::exists(&db).await.unwrap());

    let brand = BrandRepository::create("Acme".into(), &db).await.unwrap();
    assert_eq!(brand.name, "Acme");

    let renamed = BrandRepository::update_name(brand.clone(), "Acme Labs".into(), &db)
        .await
        .unwrap();
    assert_eq!(renamed.id, brand.id);
    assert_eq!(renamed.created_at, brand.created_at);

    let current = BrandRepository::find_first(&db).await.unwrap().unwrap();
    assert_eq!(current.name, "Acme Labs");
}

#[tokio::test]
async fn test_personality_replace_all() {
    let db = setup_db().await;
    let brand = BrandRepository::create("Acme".into(), &db).await.unwrap();

    let mut shuffled = answers("first");
    shuffled.reverse();
    PersonalityRepository::replace_all(brand.id, shuffled, &db)
        .await
        .unwrap();
    PersonalityRepository::replace_all(brand.id, answers("second"), &db)
        .await
        .unwrap();

    let stored = PersonalityRepository::find_by_brand(brand.id, &db)
        .await
        .unwrap();
    assert_eq!(stored.len(), 9);
    assert_eq!(
        PersonalityRepository::count_by_brand(brand.id, &db)
            .await
            .unwrap(),
        9
    );
    for (i, row) in stored.iter().enumerate() {
        assert_eq!(row.question_index, i as i32);
        assert_eq!(row.answer, format!("second {i}"));
    }
}

#[tokio::test]
async fn test_failed_replace_keeps_previous_rows() {
    let db = setup_db().await;
    let brand = BrandRepository::create("Acme".into(), &db).await.unwrap();
    PersonalityRepository::replace_all(brand.id, answers("kept"), &db)
        .await
        .unwrap();

    // duplicate index trips the unique constraint after the delete ran
    let mut broken = answers("lost");
    broken[1].question_index = 0;
    assert!(PersonalityRepository::replace_all(brand.id, broken, &db)
        .await
        .is_err());

    let stored = PersonalityRepository::find_by_brand(brand.id, &db)
        .await
        .unwrap();
    assert_eq!(stored.len(), 9);
    assert!(stored.iter().all(|row| row.answer.starts_with("kept")));
}

#[tokio::test]
async fn test_adjectives_replace_all_keeps_submission_order() {
    let db = setup_db().await;
    let brand = BrandRepository::create("Acme".into(), &db).await.unwrap();

    AdjectiveRepository::replace_all(
        brand.id,
        vec![adjective("Bold"), adjective("Warm"), adjective("Clear")],
        &db,
    )
    .await
    .unwrap();
    AdjectiveRepository::replace_all(
        brand.id,
        vec![adjective("Calm"), adjective("Witty"), adjective("Honest")],
        &db,
    )
    .await
    .unwrap();

    let names: Vec<String> = AdjectiveRepository::find_by_brand(brand.id, &db)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, ["Calm", "Witty", "Honest"]);
    assert_eq!(
        AdjectiveRepository::count_by_brand(brand.id, &db)
            .await
            .unwrap(),
        3
    );
}

#[tokio::test]
async fn test_rules_are_scoped_to_their_brand() {
    let db = setup_db().await;
    let acme = BrandRepository::create("Acme".into(), &db).await.unwrap();
    let other = BrandRepository::create("Other".into(), &db).await.unwrap();

    let first = RuleRepository::create(acme.id, rule("First"), &db)
        .await
        .unwrap();
    let second = RuleRepository::create(acme.id, rule("Second"), &db)
        .await
        .unwrap();
    let foreign = RuleRepository::create(other.id, rule("Foreign"), &db)
        .await
        .unwrap();
    assert!(first.is_active);

    let listed: Vec<i32> = RuleRepository::find_by_brand(acme.id, &db)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(listed, [second.id, first.id]);

    assert!(RuleRepository::find_owned(foreign.id, acme.id, &db)
        .await
        .unwrap()
        .is_none());
    assert!(RuleRepository::find_owned(first.id, acme.id, &db)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_rule_update_and_delete() {
    let db = setup_db().await;
    let brand = BrandRepository::create("Acme".into(), &db).await.unwrap();
    let created = RuleRepository::create(brand.id, rule("Draft"), &db)
        .await
        .unwrap();

    let toggled = RuleRepository::set_active(created.clone(), false, &db)
        .await
        .unwrap();
    assert!(!toggled.is_active);
    assert_eq!(toggled.title, created.title);

    let updated = RuleRepository::update(toggled, rule("Final"), &db)
        .await
        .unwrap();
    assert_eq!(updated.title, "Final");
    assert!(!updated.is_active);

    assert_eq!(RuleRepository::delete(updated, &db).await.unwrap(), 1);
    assert!(RuleRepository::find_by_brand(brand.id, &db)
        .await
        .unwrap()
        .is_empty());
}
