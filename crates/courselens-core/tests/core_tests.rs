use courselens_core::{
    ClientConfig, CourseQuery, CourseRecord, DataPluginDescriptor, InstructorQuery,
    InstructorRecord, UNKNOWN_METRIC,
};

#[test]
fn test_course_from_backend_json() {
    // Shape emitted by the analysis server, reviews as an array.
    let json = r#"{
        "id": 17214, "year": 2022,
        "name": "Principles of Software Construction",
        "description": "Objects, design, and concurrency",
        "instructorNames": ["Charlie Garrod", "Vincent Hellendoorn"],
        "organizationName": "CMU",
        "category": "Computer Science", "level": "Undergraduate",
        "totalStudents": 180, "totalHours": 168.0, "totalWeeks": 14,
        "estimatedWorkload": 151.2, "rate": 4.3, "price": 0.0,
        "reviews": [
            { "courseRate": 4.3, "instructorRates": [4.5, 4.1], "workloadPerWeek": 10.8 }
        ]
    }"#;

    let course: CourseRecord = serde_json::from_str(json).unwrap();
    assert_eq!(course.id, 17214);
    assert_eq!(course.instructor_names.len(), 2);
    assert!(course.is_taught_by("Charlie Garrod"));
    assert_eq!(course.reviews.len(), 1);
    assert_eq!(course.reviews[0].instructor_rates, vec![4.5, 4.1]);
    assert_eq!(course.known_rate(), Some(4.3));
}

#[test]
fn test_course_accepts_single_review_object() {
    let json = r#"{
        "id": 1, "name": "Intro",
        "reviews": { "courseRate": 3.0, "instructorRates": [], "workloadPerWeek": 2.0 }
    }"#;

    let course: CourseRecord = serde_json::from_str(json).unwrap();
    assert_eq!(course.reviews.len(), 1);
    assert_eq!(course.reviews[0].workload_per_week, 2.0);
}

#[test]
fn test_course_missing_fields_are_unknown() {
    let course: CourseRecord = serde_json::from_str(r#"{ "id": 3, "name": "Sparse" }"#).unwrap();
    assert_eq!(course.rate, UNKNOWN_METRIC);
    assert_eq!(course.estimated_workload, UNKNOWN_METRIC);
    assert!(course.reviews.is_empty());
    assert!(course.known_workload().is_none());

    let empty: CourseRecord = serde_json::from_str(r#"{ "reviews": [] }"#).unwrap();
    assert!(empty.reviews.is_empty());

    let null: CourseRecord = serde_json::from_str(r#"{ "reviews": null }"#).unwrap();
    assert!(null.reviews.is_empty());
}

#[test]
fn test_instructor_from_backend_json() {
    let json = r#"{
        "name": "Claire Le Goues", "courseNum": 2,
        "courseNames": ["17-313", "17-214"],
        "organizationNum": 1, "organizationNames": ["CMU"],
        "totalStudents": 300, "rate": 4.6
    }"#;

    let instructor: InstructorRecord = serde_json::from_str(json).unwrap();
    assert_eq!(instructor.course_num, 2);
    assert_eq!(instructor.organization_names, vec!["CMU".to_string()]);
    assert_eq!(InstructorRecord::new("x").course_num, 0);
}

#[test]
fn test_data_plugin_descriptor_display() {
    let plugin: DataPluginDescriptor = serde_json::from_str(r#"{ "name": "Udemy" }"#).unwrap();
    assert_eq!(plugin, DataPluginDescriptor::new("Udemy"));
    assert_eq!(plugin.to_string(), "Udemy");
}

#[test]
fn test_course_query_pairs() {
    let query = CourseQuery::builder()
        .name("Java")
        .instructor("Claire")
        .year(2022)
        .size(100usize)
        .build()
        .unwrap();

    assert_eq!(
        query.to_pairs(),
        vec![
            ("name", "Java".to_string()),
            ("instructor", "Claire".to_string()),
            ("year", "2022".to_string()),
            ("size", "100".to_string()),
        ]
    );
}

#[test]
fn test_query_builder_validation() {
    assert!(CourseQuery::builder().size(0usize).build().is_err());
    assert!(CourseQuery::builder().year(-1).build().is_err());
    assert!(InstructorQuery::builder().size(0usize).build().is_err());
}

#[test]
fn test_instructor_query_pairs() {
    let query = InstructorQuery::builder()
        .name("Vincent")
        .organization("CMU")
        .build()
        .unwrap();

    assert_eq!(
        query.to_pairs(),
        vec![("name", "Vincent".to_string()), ("organization", "CMU".to_string())]
    );
}

#[test]
fn test_client_config_partial_toml_style_defaults() {
    let config: ClientConfig =
        serde_json::from_str(r#"{ "server_url": "http://10.0.0.2:8080" }"#).unwrap();
    assert_eq!(config.server_url, "http://10.0.0.2:8080");
    assert_eq!(config.request_timeout_ms, ClientConfig::default().request_timeout_ms);
}
