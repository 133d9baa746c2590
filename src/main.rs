use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Mutex;

mod engine;
mod faq;
mod preprocessing;
mod stemer;

use engine::matcher::Matcher;
use faq::store::FaqStore;
use preprocessing::normalizer::Normalizer;

const DATABASE_PATH: &str = "chatbot.db";
const STOP_WORD_PATHS: [&str; 2] = ["stop_words/russian.txt", "stop_words/english.txt"];
const MATCH_THRESHOLD: usize = 2;

const GREETINGS: [&str; 3] = ["привет", "здравствуйте", "добрый день"];
const GREETING_REPLY: &str = "Здравствуйте! Я виртуальный помощник Политех Петра. Задайте вопрос о поступлении, факультетах или студенческой жизни.";
const FALLBACK_REPLY: &str = "Извините, я не нашел ответа на ваш вопрос. 😕\n\nВы можете:\n1. Уточнить формулировку\n2. Позвонить в приемную комиссию: 8 (812) 775-05-30\n3. Написать на email: abitur@spbstu.ru";

struct AppState {
    store: FaqStore,
    matcher: Matcher,
}

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Serialize)]
struct ChatResponse {
    answer: String,
    status: String,
}

fn bot_reply(answer: &str) -> HttpResponse {
    HttpResponse::Ok().json(ChatResponse {
        answer: answer.to_string(),
        status: "bot".to_string(),
    })
}

fn is_greeting(message: &str) -> bool {
    GREETINGS.iter().any(|greeting| message.contains(greeting))
}

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("FAQ Chatbot API")
}

#[post("/api/chat")]
async fn chat(request: web::Json<ChatRequest>, data: web::Data<Mutex<AppState>>) -> impl Responder {
    let state = data.lock().unwrap();
    let message = request.message.trim().to_lowercase();

    // Greeting short-circuit: never reaches the matcher.
    if is_greeting(&message) {
        return bot_reply(GREETING_REPLY);
    }

    let records = match state.store.load_all() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Failed to load questions from the database: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    match state.matcher.find_best_answer(&message, &records) {
        Some(answer) => bot_reply(&answer),
        None => bot_reply(FALLBACK_REPLY),
    }
}

#[get("/stats")]
async fn stats(data: web::Data<Mutex<AppState>>) -> impl Responder {
    let state = data.lock().unwrap();
    let record_count = state.store.load_all().map(|r| r.len()).unwrap_or(0);
    let stats = serde_json::json!({
        "record_count": record_count,
        "match_threshold": MATCH_THRESHOLD,
    });
    HttpResponse::Ok().json(stats)
}

fn load_merged_stop_words(paths: &[&str]) -> HashSet<String> {
    let mut stop_words = HashSet::new();
    for path in paths {
        match preprocessing::tokenizer::load_stop_words(path) {
            Ok(words) => stop_words.extend(words),
            Err(err) => eprintln!(
                "Warning: could not load stop words from {}: {}. Continuing without them.",
                path, err
            ),
        }
    }
    stop_words
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Opening FAQ database at {}...", DATABASE_PATH);
    let mut store = FaqStore::open(DATABASE_PATH).expect("Failed to open the FAQ database");
    store.init().expect("Failed to create the questions table");

    if store.is_empty().expect("Failed to query the questions table") {
        println!("Database is empty, seeding initial questions...");
        store
            .seed(faq::seed::DEFAULT_QUESTIONS)
            .expect("Failed to seed initial questions");
    }

    let stop_words = load_merged_stop_words(&STOP_WORD_PATHS);
    println!("Loaded {} stop words", stop_words.len());

    let matcher = Matcher::new(Normalizer::new(stop_words), MATCH_THRESHOLD);
    let app_state = web::Data::new(Mutex::new(AppState { store, matcher }));

    println!("Starting HTTP server at http://127.0.0.1:5000");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new()
            .wrap(cors)
            .app_data(app_state.clone())
            .service(hello)
            .service(chat)
            .service(stats)
    })
    .bind("127.0.0.1:5000")?
    .run()
    .await
}
