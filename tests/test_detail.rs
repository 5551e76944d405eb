use fridge2table::detail::fetch_detail;
use fridge2table::providers::MealDbProvider;
use fridge2table::{DetailError, Recipe};
use mockito::{Matcher, Server};

const KEDGEREE: &str = r#"{"meals": [{
    "idMeal": "52887",
    "strMeal": "Kedgeree",
    "strCategory": "Seafood",
    "strArea": "British",
    "strInstructions": "  For the rice, heat the oil.\r\n\r\n   Add the rice and stir.\r\n",
    "strMealThumb": "https://img.example/kedgeree.jpg",
    "strSource": "http://www.bbc.co.uk/food/recipes/kedgeree_70955",
    "strIngredient1": "Smoked Haddock",
    "strIngredient2": "Bay Leaves",
    "strIngredient3": "Milk",
    "strIngredient4": " ",
    "strIngredient5": "",
    "strMeasure1": "300g",
    "strMeasure2": "2",
    "strMeasure3": " ",
    "strMeasure4": "1 tbsp",
    "strMeasure5": null,
    "strIngredient6": null,
    "strMeasure6": null
}]}"#;

#[tokio::test]
async fn test_fetch_detail() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52887".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(KEDGEREE)
        .create_async()
        .await;

    let provider = MealDbProvider::with_base_url(server.url(), None).unwrap();
    let detail = fetch_detail(&provider, "52887", &[]).await.unwrap();

    assert_eq!(detail.name, "Kedgeree");
    assert_eq!(detail.subtitle.as_deref(), Some("British · Seafood"));
    let lines: Vec<String> = detail.ingredients.iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["Smoked Haddock – 300g", "Bay Leaves – 2", "Milk"]);
    assert_eq!(
        detail.instructions,
        "For the rice, heat the oil.\nAdd the rice and stir."
    );
    assert_eq!(
        detail.source_url.as_deref(),
        Some("http://www.bbc.co.uk/food/recipes/kedgeree_70955")
    );
    // "Kedgeree" has 8 characters -> 15 + 2
    assert_eq!(detail.minutes, 17);
    assert!(detail.is_quick);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_detail_reuses_search_estimate() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(KEDGEREE)
        .create_async()
        .await;

    let mut from_search = Recipe::new("52887", "Kedgeree", "");
    from_search.minutes = 34;
    from_search.is_quick = false;

    let provider = MealDbProvider::with_base_url(server.url(), None).unwrap();
    let detail = fetch_detail(&provider, "52887", &[from_search]).await.unwrap();
    assert_eq!(detail.minutes, 34);
    assert!(!detail.is_quick);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let provider = MealDbProvider::with_base_url(server.url(), None).unwrap();
    let result = fetch_detail(&provider, "99999999", &[]).await;
    assert!(matches!(result, Err(DetailError::NotFound(id)) if id == "99999999"));
}

#[tokio::test]
async fn test_error_status_is_network_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let provider = MealDbProvider::with_base_url(server.url(), None).unwrap();
    let result = fetch_detail(&provider, "1", &[]).await;
    assert!(matches!(
        result,
        Err(DetailError::Network {
            status: Some(404),
            ..
        })
    ));
}
