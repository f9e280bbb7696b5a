use adaptive_cards::enums::*;
use adaptive_cards::schema::{self, SchemaStore};
use adaptive_cards::validate::{check_body, check_field, check_versions, check_versions_in};
use adaptive_cards::version::*;
use adaptive_cards::*;

/// Helper: validate against a built-in platform and return the findings.
fn findings_for(card: &Card, platform: Platform) -> Vec<Finding> {
    let mut validator = CardValidator::for_platform(platform);
    match validator.validate(card) {
        Ok(()) => assert!(validator.details().is_empty()),
        Err(ValidationError::Failed { findings }) => {
            assert_eq!(findings, validator.details().len())
        }
        Err(other) => panic!("configuration error: {other}"),
    }
    validator.details().to_vec()
}

fn card_scope_findings(card: &Card, platform: Platform) -> Vec<Finding> {
    let mut validator =
        CardValidator::for_platform(platform).with_version_scope(VersionScope::Card);
    let _ = validator.validate(card);
    validator.details().to_vec()
}

fn details(findings: &[Finding]) -> Vec<String> {
    findings
        .iter()
        .map(|f| f.detail.clone().unwrap_or_default())
        .collect()
}

fn failures(findings: &[Finding]) -> Vec<ValidationFailure> {
    findings.iter().map(|f| f.failure).collect()
}

fn text_blocks(count: usize) -> Vec<TextBlock> {
    (0..count).map(|_| TextBlock::new("TestCard")).collect()
}

// ─── Empty card ─────────────────────────────────────────────────────────────

#[test]
fn empty_card_on_teams_reports_only_empty_card() {
    let card = Card::builder().build();
    let findings = findings_for(&card, Platform::MicrosoftTeams);

    assert_eq!(failures(&findings), vec![ValidationFailure::EmptyCard]);
    assert_eq!(findings[0].message, "card body is empty");
    assert_eq!(findings[0].detail, None);
}

#[test]
fn empty_body_list_counts_as_empty() {
    let card = Card::builder().add_items(Vec::<TextBlock>::new()).build();
    assert_eq!(card.body, Some(vec![]));

    let findings = findings_for(&card, Platform::MicrosoftTeams);
    assert_eq!(failures(&findings), vec![ValidationFailure::EmptyCard]);
}

#[test]
fn empty_or_absent_body_is_one_finding_everywhere() {
    let absent = Card::builder().build();
    let empty = Card::builder().add_items(Vec::<CardItem>::new()).build();
    for platform in Platform::ALL {
        for card in [&absent, &empty] {
            assert_eq!(
                failures(&findings_for(card, platform)),
                vec![ValidationFailure::EmptyCard],
                "{platform} {:?}",
                card.body
            );
        }
    }
}

#[test]
fn empty_card_does_not_stop_other_checks() {
    let card = Card::builder().version(V1_0).rtl(true).build();
    let findings = card_scope_findings(&card, Platform::MicrosoftTeams);

    assert_eq!(
        failures(&findings),
        vec![
            ValidationFailure::EmptyCard,
            ValidationFailure::InvalidFieldVersion
        ]
    );
    assert_eq!(
        findings[1].detail.as_deref(),
        Some("Field version exceeds card version: AdaptiveCard | rtl | 1.5")
    );
}

#[test]
fn check_body_accepts_non_empty_body() {
    let card = Card::builder().add_item(TextBlock::new("hi")).build();
    let mut findings = Vec::new();
    check_body(&card, &mut findings);
    assert!(findings.is_empty());
}

// ─── Field versions ─────────────────────────────────────────────────────────

#[test]
fn monospace_text_on_a_1_0_card_is_flagged() {
    let card = Card::builder()
        .version(V1_0)
        .add_item(TextBlock {
            font_type: Some(FontType::Monospace),
            ..TextBlock::new("Test Card")
        })
        .build();
    let findings = findings_for(&card, Platform::MicrosoftTeams);

    assert_eq!(
        failures(&findings),
        vec![ValidationFailure::InvalidFieldVersion]
    );
    assert_eq!(findings[0].message, "field version exceeds card version");
    let detail = findings[0].detail.as_deref().unwrap();
    assert_eq!(
        detail,
        "Field version exceeds card version: TextBlock | font_type | 1.2"
    );
}

#[test]
fn same_card_at_1_2_passes() {
    let card = Card::builder()
        .version(V1_2)
        .add_item(TextBlock {
            font_type: Some(FontType::Monospace),
            ..TextBlock::new("Test Card")
        })
        .build();
    assert!(findings_for(&card, Platform::MicrosoftTeams).is_empty());
}

#[test]
fn every_violation_is_reported_in_walk_order() {
    let card = Card::builder()
        .version(V1_0)
        .add_item(TextBlock {
            font_type: Some(FontType::Monospace),
            style: Some(TextBlockStyle::Heading),
            ..TextBlock::new("Heading")
        })
        .add_item(TextBlock {
            common: ElementProps {
                is_visible: Some(false),
                ..ElementProps::default()
            },
            ..TextBlock::new("Hidden")
        })
        .build();
    let findings = findings_for(&card, Platform::MicrosoftTeams);

    assert_eq!(
        details(&findings),
        vec![
            "Field version exceeds card version: TextBlock | font_type | 1.2",
            "Field version exceeds card version: TextBlock | style | 1.5",
            "Field version exceeds card version: TextBlock | is_visible | 1.2",
        ]
    );
}

#[test]
fn nested_fields_are_attributed_to_their_owner() {
    let card = Card::builder()
        .version(V1_0)
        .add_item(ColumnSet {
            columns: Some(vec![Column {
                items: Some(vec![
                    Container {
                        items: vec![
                            TextBlock {
                                font_type: Some(FontType::Monospace),
                                ..TextBlock::new("deep")
                            }
                            .into(),
                        ],
                        ..Container::default()
                    }
                    .into(),
                ]),
                ..Column::default()
            }]),
            ..ColumnSet::default()
        })
        .build();
    let findings = findings_for(&card, Platform::MicrosoftTeams);

    assert_eq!(findings.len(), 1);
    assert!(
        findings[0]
            .detail
            .as_deref()
            .unwrap()
            .ends_with("TextBlock | font_type | 1.2")
    );
}

/// A 1.0 card whose newer fields sit outside body scalars.
fn card_with_newer_composites() -> Card {
    Card::builder()
        .version(V1_0)
        .rtl(true)
        .add_item(Image {
            select_action: Some(Box::new(ActionOpenUrl::new("https://example.com").into())),
            ..Image::new("https://example.com/logo.png")
        })
        .add_action(ActionSubmit {
            associated_inputs: Some(AssociatedInputs::None),
            ..ActionSubmit::default()
        })
        .build()
}

#[test]
fn default_scope_checks_body_scalars_only() {
    let card = card_with_newer_composites();
    assert_eq!(
        CardValidator::for_platform(Platform::MicrosoftTeams).version_scope(),
        VersionScope::Body
    );
    assert!(findings_for(&card, Platform::MicrosoftTeams).is_empty());

    let mut findings = Vec::new();
    check_versions(&card, &mut findings);
    assert!(findings.is_empty(), "{findings:?}");
}

#[test]
fn card_scope_checks_card_fields_actions_and_composites() {
    let card = card_with_newer_composites();
    let findings = card_scope_findings(&card, Platform::MicrosoftTeams);

    assert_eq!(
        details(&findings),
        vec![
            "Field version exceeds card version: AdaptiveCard | rtl | 1.5",
            "Field version exceeds card version: Image | select_action | 1.1",
            "Field version exceeds card version: Action.Submit | associated_inputs | 1.3",
        ]
    );
}

#[test]
fn background_image_object_form_needs_1_2() {
    let object = BackgroundImageValue::from(BackgroundImage {
        url: "https://example.com/bg.png".into(),
        ..BackgroundImage::default()
    });
    let column_set = |background: BackgroundImageValue| ColumnSet {
        columns: Some(vec![Column {
            background_image: Some(background),
            ..Column::default()
        }]),
        ..ColumnSet::default()
    };

    let card = Card::builder()
        .version(V1_0)
        .add_item(column_set(object.clone()))
        .build();
    let mut findings = Vec::new();
    check_versions(&card, &mut findings);
    assert_eq!(
        details(&findings),
        vec!["Field version exceeds card version: BackgroundImage | url | 1.2"]
    );

    let card = Card::builder()
        .version(V1_0)
        .add_item(column_set("https://example.com/bg.png".into()))
        .build();
    let mut findings = Vec::new();
    check_versions(&card, &mut findings);
    assert_eq!(
        details(&findings),
        vec!["Field version exceeds card version: Column | background_image | 1.2"]
    );

    // A bare URL on the card itself is fine at 1.0; the object form is not.
    let bare = Card::builder()
        .version(V1_0)
        .background_image("https://example.com/bg.png")
        .add_item(TextBlock::new("hi"))
        .build();
    let mut findings = Vec::new();
    check_versions_in(&bare, VersionScope::Card, &mut findings);
    assert!(findings.is_empty(), "{findings:?}");

    let with_object = Card::builder()
        .version(V1_0)
        .background_image(object)
        .add_item(TextBlock::new("hi"))
        .build();
    let mut findings = Vec::new();
    check_versions_in(&with_object, VersionScope::Card, &mut findings);
    assert_eq!(
        details(&findings),
        vec!["Field version exceeds card version: BackgroundImage | url | 1.2"]
    );
}

#[test]
fn two_digit_minor_versions_compare_numerically() {
    let card = Card::builder()
        .version(Version::new(1, 10))
        .add_item(TextBlock {
            font_type: Some(FontType::Monospace),
            ..TextBlock::new("Test Card")
        })
        .build();
    let mut findings = Vec::new();
    check_versions(&card, &mut findings);
    assert!(findings.is_empty(), "{findings:?}");
}

#[test]
fn check_field_compares_against_card_version() {
    let block = TextBlock::new("x");
    let mut findings = Vec::new();
    check_field(V1_2, &block, "font_type", V1_2, &mut findings);
    assert!(findings.is_empty());
    check_field(V1_1, &block, "font_type", V1_2, &mut findings);
    assert_eq!(findings.len(), 1);
}

// ─── Full card ──────────────────────────────────────────────────────────────

fn open_url() -> Action {
    ActionOpenUrl::new("https://example.com").into()
}

fn shown_card(text: &str) -> Box<Card> {
    Box::new(Card::builder().add_item(TextBlock::new(text)).build())
}

/// A card using every element, container, input and action plus the card
/// level auxiliary nodes. Fields introduced in 1.6 are set only from 1.6 on.
fn full_card(version: Version) -> Card {
    let latest = version >= V1_6;

    let refresh = Refresh {
        action: Some(Box::new(
            ActionExecute {
                verb: Some("refresh".into()),
                ..ActionExecute::default()
            }
            .into(),
        )),
        expires: latest.then(|| "2026-01-01T00:00:00Z".to_string()),
        user_ids: Some(vec!["user-1".into()]),
    };
    let authentication = Authentication {
        text: Some("Sign in".into()),
        connection_name: Some("oauth".into()),
        token_exchange_resource: Some(TokenExchangeResource {
            id: "tx".into(),
            uri: "api://tx".into(),
            provider_id: "aad".into(),
        }),
        buttons: Some(vec![AuthCardButton {
            button_type: "signin".into(),
            value: "https://example.com/login".into(),
            title: Some("Sign in".into()),
            image: None,
        }]),
    };

    let heading = TextBlock {
        common: ElementProps {
            id: Some("heading".into()),
            spacing: Some(Spacing::Medium),
            is_visible: Some(true),
            ..ElementProps::default()
        },
        color: Some(Colors::Accent),
        font_type: Some(FontType::Monospace),
        size: Some(FontSize::Large),
        weight: Some(FontWeight::Bolder),
        wrap: Some(true),
        max_lines: Some(2),
        style: Some(TextBlockStyle::Heading),
        ..TextBlock::new("Heading")
    };
    let image = Image {
        alt_text: Some("logo".into()),
        size: Some(ImageSize::Small),
        style: Some(ImageStyle::Person),
        select_action: Some(Box::new(open_url())),
        ..Image::new("https://example.com/logo.png")
    };
    let media = Media {
        sources: vec![MediaSource {
            url: "https://example.com/clip.mp4".into(),
            mime_type: Some("video/mp4".into()),
        }],
        poster: Some("https://example.com/poster.png".into()),
        alt_text: Some("clip".into()),
        caption_sources: latest.then(|| {
            vec![CaptionSource {
                mime_type: "vtt".into(),
                url: "https://example.com/clip.vtt".into(),
                label: "English".into(),
            }]
        }),
        ..Media::default()
    };
    let rich_text = RichTextBlock {
        inlines: vec![
            Inline::Text("plain ".into()),
            Inline::Run(TextRun {
                text: "run".into(),
                italic: Some(true),
                highlight: Some(true),
                select_action: Some(Box::new(ActionSubmit::default().into())),
                ..TextRun::default()
            }),
        ],
        ..RichTextBlock::default()
    };
    let action_set = ActionSet {
        actions: vec![
            ActionShowCard {
                common: ActionProps {
                    title: Some("More".into()),
                    ..ActionProps::default()
                },
                card: Some(shown_card("details")),
            }
            .into(),
            ActionToggleVisibility {
                target_elements: vec![TargetElement {
                    element_id: "heading".into(),
                    is_visible: Some(false),
                }],
                ..ActionToggleVisibility::default()
            }
            .into(),
        ],
        ..ActionSet::default()
    };
    let container = Container {
        items: vec![TextBlock::new("inside").into()],
        style: Some(ContainerStyle::Emphasis),
        bleed: Some(true),
        background_image: Some("https://example.com/bg.png".into()),
        min_height: Some("50px".into()),
        rtl: Some(false),
        select_action: Some(Box::new(open_url())),
        ..Container::default()
    };
    let column_set = ColumnSet {
        columns: Some(vec![
            Column {
                items: Some(vec![TextBlock::new("left").into()]),
                width: Some(ColumnWidth::Named("auto".into())),
                background_image: Some(
                    BackgroundImage {
                        url: "https://example.com/col.png".into(),
                        fill_mode: Some(ImageFillMode::Repeat),
                        ..BackgroundImage::default()
                    }
                    .into(),
                ),
                ..Column::default()
            },
            Column {
                width: Some(ColumnWidth::Weight(2)),
                ..Column::default()
            },
        ]),
        horizontal_alignment: Some(HorizontalAlignment::Center),
        ..ColumnSet::default()
    };
    let table = Table {
        columns: Some(vec![TableColumnDefinition {
            width: Some(ColumnWidth::Weight(1)),
            ..TableColumnDefinition::default()
        }]),
        rows: Some(vec![TableRow {
            cells: Some(vec![TableCell {
                items: vec![TextBlock::new("cell").into()],
                ..TableCell::default()
            }]),
            ..TableRow::default()
        }]),
        first_row_as_header: Some(true),
        grid_style: Some(ContainerStyle::Accent),
        ..Table::default()
    };
    let text_input = InputText {
        common: InputProps {
            label: Some("Name".into()),
            is_required: Some(true),
            error_message: Some("Required".into()),
            ..InputProps::new("name")
        },
        placeholder: Some("Your name".into()),
        style: Some(TextInputStyle::Email),
        inline_action: Some(Box::new(
            ActionSubmit {
                common: ActionProps {
                    title: Some("Send".into()),
                    ..ActionProps::default()
                },
                ..ActionSubmit::default()
            }
            .into(),
        )),
        ..InputText::default()
    };

    let mut card = Card::builder()
        .version(version)
        .refresh(refresh)
        .authentication(authentication)
        .select_action(ActionExecute {
            verb: Some("tap".into()),
            ..ActionExecute::default()
        })
        .fallback_text("fallback")
        .background_image(BackgroundImage {
            url: "https://example.com/bg.png".into(),
            fill_mode: Some(ImageFillMode::Cover),
            horizontal_alignment: Some(HorizontalAlignment::Center),
            vertical_alignment: Some(VerticalAlignment::Top),
        })
        .min_height("100px")
        .rtl(false)
        .speak("hello")
        .lang("en")
        .vertical_content_alignment(VerticalAlignment::Top)
        .width(MsTeamsWidth::Full)
        .add_item(heading)
        .add_item(image)
        .add_item(media)
        .add_item(rich_text)
        .add_item(action_set)
        .add_item(container)
        .add_item(column_set)
        .add_item(FactSet {
            facts: vec![Fact::new("Status", "Done")],
            ..FactSet::default()
        })
        .add_item(ImageSet {
            images: vec![Image::new("https://example.com/1.png")],
            image_size: Some(ImageSize::Medium),
            ..ImageSet::default()
        })
        .add_item(table)
        .add_item(text_input)
        .add_item(InputNumber {
            common: InputProps::new("count"),
            min: Some(0.into()),
            max: Some(10.into()),
            value: Some(5.into()),
            ..InputNumber::default()
        })
        .add_item(InputDate {
            common: InputProps::new("day"),
            value: Some("2024-01-01".into()),
            ..InputDate::default()
        })
        .add_item(InputTime {
            common: InputProps::new("at"),
            value: Some("09:30".into()),
            ..InputTime::default()
        })
        .add_item(InputToggle {
            common: InputProps::new("agree"),
            title: "I agree".into(),
            value_on: Some("yes".into()),
            value_off: Some("no".into()),
            ..InputToggle::default()
        })
        .add_item(InputChoiceSet {
            common: InputProps::new("pick"),
            choices: Some(vec![InputChoice {
                title: "Red".into(),
                value: "red".into(),
            }]),
            style: Some(ChoiceInputStyle::Filtered),
            ..InputChoiceSet::default()
        })
        .add_action(ActionOpenUrl {
            common: ActionProps {
                title: Some("Open".into()),
                tooltip: Some("Open the site".into()),
                ..ActionProps::default()
            },
            ..ActionOpenUrl::new("https://example.com")
        })
        .add_action(ActionSubmit {
            common: ActionProps {
                title: Some("Submit".into()),
                style: Some(ActionStyle::Positive),
                ..ActionProps::default()
            },
            data: Some(serde_json::json!({ "x": 1 })),
            associated_inputs: Some(AssociatedInputs::Auto),
        })
        .add_action(ActionShowCard {
            card: Some(shown_card("shown")),
            ..ActionShowCard::default()
        })
        .add_action(ActionToggleVisibility {
            target_elements: vec![TargetElement {
                element_id: "heading".into(),
                is_visible: None,
            }],
            common: ActionProps {
                mode: Some(ActionMode::Secondary),
                ..ActionProps::default()
            },
        })
        .add_action(ActionExecute {
            verb: Some("run".into()),
            common: ActionProps {
                is_enabled: Some(true),
                ..ActionProps::default()
            },
            ..ActionExecute::default()
        })
        .build();
    if latest {
        card.metadata = Some(Metadata {
            web_url: Some("https://example.com/card".into()),
        });
    }
    card
}

#[test]
fn full_card_passes_on_hosts_that_support_its_version() {
    let latest = full_card(V1_6);
    assert!(findings_for(&latest, Platform::WindowsWidgets).is_empty());

    let teams = full_card(V1_5);
    assert!(findings_for(&teams, Platform::MicrosoftTeams).is_empty());

    // Nothing in either card is newer than its version, even when every
    // field is checked.
    assert!(card_scope_findings(&latest, Platform::WindowsWidgets).is_empty());
    assert!(card_scope_findings(&teams, Platform::MicrosoftTeams).is_empty());
}

#[test]
fn full_card_on_an_older_host_is_a_schema_violation() {
    let findings = findings_for(&full_card(V1_6), Platform::MicrosoftTeams);
    assert!(!findings.is_empty());
    assert!(
        findings
            .iter()
            .all(|f| f.failure == ValidationFailure::InvalidSchema),
        "{findings:?}"
    );
}

// ─── Schema ─────────────────────────────────────────────────────────────────

#[test]
fn element_unknown_to_platform_schema_is_flagged() {
    let card = Card::builder()
        .version(V1_5)
        .add_item(Table {
            rows: Some(vec![TableRow {
                cells: Some(vec![TableCell {
                    items: vec![TextBlock::new("cell").into()],
                    ..TableCell::default()
                }]),
                ..TableRow::default()
            }]),
            ..Table::default()
        })
        .build();

    let findings = findings_for(&card, Platform::Outlook);
    assert_eq!(failures(&findings), vec![ValidationFailure::InvalidSchema]);
    assert_eq!(findings[0].message, "official card schema violated");
    assert!(findings[0].detail.is_some());

    assert!(findings_for(&card, Platform::MicrosoftTeams).is_empty());
}

#[test]
fn injected_unknown_field_violates_schema() {
    let card = Card::builder().add_item(TextBlock::new("hi")).build();
    let mut document = to_value(&card).unwrap();
    document
        .as_object_mut()
        .unwrap()
        .insert("unknownField".to_string(), serde_json::json!(true));

    let mut findings = Vec::new();
    schema::check_schema(
        &document,
        V1_5,
        std::path::Path::new(schema::DEFAULT_SCHEMA_DIR),
        &mut findings,
    )
    .unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].failure, ValidationFailure::InvalidSchema);
    assert!(
        findings[0].detail.as_deref().unwrap().contains("unknownField"),
        "{:?}",
        findings[0].detail
    );
}

#[test]
fn injected_unknown_element_type_violates_schema() {
    let card = Card::builder().add_item(TextBlock::new("hi")).build();
    let mut document = to_value(&card).unwrap();
    document["body"][0]["type"] = serde_json::json!("Carousel");

    let mut findings = Vec::new();
    schema::check_schema(
        &document,
        V1_6,
        std::path::Path::new(schema::DEFAULT_SCHEMA_DIR),
        &mut findings,
    )
    .unwrap();
    assert_eq!(findings.len(), 1);
}

#[test]
fn every_bundled_schema_accepts_a_minimal_card() {
    let card = Card::builder().add_item(TextBlock::new("hi")).build();
    let document = to_value(&card).unwrap();
    for version in KNOWN_VERSIONS {
        let mut findings = Vec::new();
        schema::check_schema(
            &document,
            version,
            std::path::Path::new(schema::DEFAULT_SCHEMA_DIR),
            &mut findings,
        )
        .unwrap();
        assert!(findings.is_empty(), "schema {version}: {findings:?}");
    }
}

#[test]
fn missing_schema_directory_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let card = Card::builder().add_item(TextBlock::new("hi")).build();
    let mut validator =
        CardValidator::for_platform(Platform::MicrosoftTeams).with_schema_dir(dir.path());

    let err = validator.validate(&card).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Schema(SchemaError::Read { .. })
    ));
    assert!(err.to_string().contains("schema-1.5.json"));
    assert!(validator.details().is_empty());
}

#[test]
fn malformed_schema_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("schema-1.0.json"), "{ not json").unwrap();
    let card = Card::builder().add_item(TextBlock::new("hi")).build();
    let mut validator = CardValidator::for_platform(Platform::Outlook).with_schema_dir(dir.path());

    assert!(matches!(
        validator.validate(&card),
        Err(ValidationError::Schema(SchemaError::Parse { .. }))
    ));
}

#[test]
fn uncompilable_schema_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("schema-1.0.json"),
        r#"{"type": "object", "minProperties": "many"}"#,
    )
    .unwrap();
    let card = Card::builder().add_item(TextBlock::new("hi")).build();
    let mut validator = CardValidator::for_platform(Platform::Outlook).with_schema_dir(dir.path());

    assert!(matches!(
        validator.validate(&card),
        Err(ValidationError::Schema(SchemaError::Compile { .. }))
    ));
}

#[test]
fn memoized_store_serves_repeated_runs() {
    let store = SchemaStore::default().memoized();
    assert!(store.is_memoized());
    let mut validator =
        CardValidator::for_platform(Platform::MicrosoftTeams).with_schema_store(store);
    let card = Card::builder().add_item(TextBlock::new("hi")).build();

    assert!(validator.validate(&card).is_ok());
    assert!(validator.validate(&card).is_ok());
}

// ─── Size ───────────────────────────────────────────────────────────────────

#[test]
fn card_just_under_teams_limit_passes() {
    let card = Card::builder().add_items(text_blocks(730)).build();
    assert!(card_size(&card).unwrap() < 28.0);
    assert!(findings_for(&card, Platform::MicrosoftTeams).is_empty());
}

#[test]
fn card_just_over_teams_limit_is_flagged() {
    let card = Card::builder().add_items(text_blocks(740)).build();
    assert!(card_size(&card).unwrap() > 28.0);

    let findings = findings_for(&card, Platform::MicrosoftTeams);
    assert_eq!(
        failures(&findings),
        vec![ValidationFailure::SizeLimitExceeded]
    );
    assert_eq!(
        findings[0].message,
        "card exceeds the allowed card size for framework"
    );
    assert_eq!(
        findings[0].detail.as_deref(),
        Some("Microsoft Teams | 28 KB")
    );

    // 40 KB hosts still accept it.
    assert!(findings_for(&card, Platform::BotWebChat).is_empty());
}

#[test]
fn card_size_measures_compact_utf8_json() {
    let card = Card::builder().add_item(TextBlock::new("héllo ✓")).build();
    let json = to_json(&card).unwrap();
    assert_eq!(card_size(&card).unwrap(), json.len() as f64 / 1024.0);
    assert!(json.len() > json.chars().count());
}

// ─── Orchestration ──────────────────────────────────────────────────────────

#[test]
fn validation_is_idempotent() {
    let card = Card::builder()
        .version(V1_0)
        .add_item(TextBlock {
            font_type: Some(FontType::Monospace),
            ..TextBlock::new("Test Card")
        })
        .build();
    let mut validator = CardValidator::for_platform(Platform::MicrosoftTeams);
    let first = validator.validate(&card).is_ok();
    let first_details = validator.details().to_vec();
    let second = validator.validate(&card).is_ok();

    assert_eq!(first, second);
    assert_eq!(first_details, validator.details());
}

#[test]
fn findings_are_replaced_on_each_run() {
    let mut validator = CardValidator::for_platform(Platform::MicrosoftTeams);
    assert!(validator.validate(&Card::default()).is_err());
    assert_eq!(validator.details().len(), 1);

    let good = Card::builder().add_item(TextBlock::new("hi")).build();
    assert!(validator.validate(&good).is_ok());
    assert!(validator.details().is_empty());
}

#[test]
fn failed_error_counts_findings() {
    let card = Card::builder().version(V1_0).rtl(true).build();
    let mut validator = CardValidator::for_platform(Platform::MicrosoftTeams)
        .with_version_scope(VersionScope::Card);
    let err = validator.validate(&card).unwrap_err();
    assert!(matches!(err, ValidationError::Failed { findings: 2 }));
    assert_eq!(err.to_string(), "card failed validation with 2 finding(s)");
}

#[test]
fn load_parses_and_validates() {
    let ok = r#"{"type":"AdaptiveCard","version":"1.0","body":[{"type":"TextBlock","text":"hi"}]}"#;
    let card = load(ok, Platform::Outlook).unwrap();
    assert_eq!(card.version, V1_0);

    let empty = r#"{"type":"AdaptiveCard","version":"1.0"}"#;
    match load(empty, Platform::Outlook) {
        Err(CardError::Invalid(findings)) => {
            assert_eq!(failures(&findings), vec![ValidationFailure::EmptyCard])
        }
        other => panic!("unexpected: {other:?}"),
    }

    assert!(matches!(
        load("{", Platform::Outlook),
        Err(CardError::Parse(_))
    ));
}
