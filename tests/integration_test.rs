use quiz_pdf_import::models::load_text_to_document;
use quiz_pdf_import::workflow::{PageCtx, PageFlow};
use quiz_pdf_import::{App, Config, ExtractedPage, PageOutcome, PageText};
use std::fs;
use std::path::{Path, PathBuf};

/// 一个三页的样例文档：第 1、3 页有题目，第 2 页是空白页（扫描件）
const RULES_QUIZ: &str = "Q1 What is the penalty for a false start?\no\n__Five yards__\no\nTen yards\nQ2 How many players are on the field?\no\n__Eleven__\no\nTwelve\n\u{0c}\n \n\u{0c}Q3 Which call stops the clock?\no\n__Incomplete pass__\no\nHandoff\n";

/// 为单个测试创建独立的临时目录
fn test_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "quiz_pdf_import_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("pages")).expect("创建测试目录失败");
    root
}

fn test_config(root: &Path) -> Config {
    Config {
        pages_folder: root.join("pages").to_string_lossy().to_string(),
        output_folder: root.join("out").to_string_lossy().to_string(),
        output_format: "toml".to_string(),
        warn_file: root.join("warn.txt").to_string_lossy().to_string(),
        output_log_file: root.join("output.txt").to_string_lossy().to_string(),
        max_concurrent_documents: 2,
        keep_unanswered: false,
        verbose_logging: false,
    }
}

#[test]
fn test_load_document_splits_pages() {
    let root = test_root("loader");
    let file = root.join("pages").join("rules_quiz.txt");
    fs::write(&file, RULES_QUIZ).expect("写入样例文件失败");

    let document = tokio_test::block_on(load_text_to_document(&file)).expect("加载文档失败");

    assert_eq!(document.name, "rules_quiz");
    assert_eq!(document.pages.len(), 3);
    assert_eq!(document.pages[0].page_number, 1);
    assert!(!document.pages[0].is_blank());
    assert!(document.pages[1].is_blank());
    assert_eq!(document.pages[2].page_number, 3);

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_app_imports_documents_end_to_end() {
    let root = test_root("app");
    fs::write(root.join("pages").join("rules_quiz.txt"), RULES_QUIZ).expect("写入样例文件失败");

    let stats = App::initialize(test_config(&root))
        .expect("初始化应用失败")
        .run()
        .await
        .expect("运行应用失败");

    assert_eq!(stats.total, 1);
    assert_eq!(stats.success, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.questions, 3);
    assert_eq!(stats.answers, 6);

    // 第 1 页的输出文件可以重新读回
    let content =
        fs::read_to_string(root.join("out").join("rules_quiz_p1.toml")).expect("读取输出文件失败");
    let page: ExtractedPage = toml::from_str(&content).expect("解析输出文件失败");

    assert_eq!(page.document, "rules_quiz");
    assert_eq!(page.page_number, 1);
    assert_eq!(page.questions.len(), 2);
    assert_eq!(
        page.questions[0].prompt,
        "What is the penalty for a false start?"
    );
    assert!(page.questions[0].answers[0].is_correct);
    assert!(!page.questions[0].answers[1].is_correct);

    // 空白页没有输出文件，其余页都有
    assert!(!root.join("out").join("rules_quiz_p2.toml").exists());
    assert!(root.join("out").join("rules_quiz_p3.toml").exists());

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_page_without_questions_writes_warn() {
    let root = test_root("warn");
    let config = test_config(&root);

    let flow = PageFlow::new(&config).expect("创建页处理流程失败");
    let page = PageText {
        page_number: 1,
        text: "Some scanned preamble\nwith no question structure".to_string(),
    };
    let ctx = PageCtx::new("notes".to_string(), 1, 1);

    let outcome = flow.run(&page, &ctx).await.expect("页处理失败");

    assert_eq!(outcome, PageOutcome::NoQuestions);

    let warn = fs::read_to_string(root.join("warn.txt")).expect("读取警告文件失败");
    assert!(warn.contains("notes"));
    assert!(warn.contains("页 1"));

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_blank_page_is_skipped() {
    let root = test_root("blank");
    let config = test_config(&root);

    let flow = PageFlow::new(&config).expect("创建页处理流程失败");
    let page = PageText {
        page_number: 2,
        text: " \n ".to_string(),
    };
    let ctx = PageCtx::new("scan".to_string(), 1, 2);

    let outcome = flow.run(&page, &ctx).await.expect("页处理失败");

    assert_eq!(outcome, PageOutcome::Blank);
    // 空白页不产生警告，也不产生输出文件
    assert!(!root.join("warn.txt").exists());
    assert!(!root.join("out").exists());

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_json_output_format() {
    let root = test_root("json");
    fs::write(
        root.join("pages").join("quiz.txt"),
        "Q1 Prompt\no\n__A__\no\nB\n",
    )
    .expect("写入样例文件失败");

    let config = Config {
        output_format: "json".to_string(),
        ..test_config(&root)
    };

    let stats = App::initialize(config)
        .expect("初始化应用失败")
        .run()
        .await
        .expect("运行应用失败");

    assert_eq!(stats.success, 1);

    let content =
        fs::read_to_string(root.join("out").join("quiz_p1.json")).expect("读取输出文件失败");
    let page: ExtractedPage = serde_json::from_str(&content).expect("解析输出文件失败");

    assert_eq!(page.questions.len(), 1);
    assert_eq!(page.questions[0].answers[0].text, "A");
    assert!(page.questions[0].answers[0].is_correct);

    let _ = fs::remove_dir_all(&root);
}
