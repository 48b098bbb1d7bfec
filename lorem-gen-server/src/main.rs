use std::env;

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use lorem_gen_core::model::word_bank;
use lorem_gen_core::{join_paragraphs, GenerationInput, Generator};
use serde::Deserialize;

/// Struct representing query parameters for the `/v1/generate` endpoints
#[derive(Deserialize)]
struct GenerateParams {
	paragraphs: Option<i64>,
	sentences: Option<i64>,
	seed: Option<u64>,
	commas: Option<f64> // probability of the comma on long sentences
}

/// Server settings, read once from the environment.
#[derive(Debug, Clone)]
struct ServerConfig {
	host: String,
	port: u16,
	paragraphs: i64,
	sentences: i64
}

impl ServerConfig {
	/// Reads `LOREM_HOST`, `LOREM_PORT`, `LOREM_PARAGRAPHS` and `LOREM_SENTENCES`.
	///
	/// Missing or unparsable values fall back to the defaults.
	fn from_env() -> Self {
		let defaults = Self::default();
		Self {
			host: env::var("LOREM_HOST").unwrap_or(defaults.host),
			port: read_env("LOREM_PORT", defaults.port),
			paragraphs: read_env("LOREM_PARAGRAPHS", defaults.paragraphs),
			sentences: read_env("LOREM_SENTENCES", defaults.sentences)
		}
	}
}

impl Default for ServerConfig {
	fn default() -> Self {
		let input = GenerationInput::default();
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			paragraphs: input.paragraphs() as i64,
			sentences: input.sentences() as i64
		}
	}
}

fn read_env<T: std::str::FromStr>(key: &str, default: T) -> T {
	match env::var(key) {
		Ok(value) => match value.parse() {
			Ok(parsed) => parsed,
			Err(_) => {
				log::warn!("{key}={value} is invalid, using default");
				default
			}
		},
		Err(_) => default
	}
}

impl GenerateParams {
	/// Builds the clamped generation input, using the configured defaults
	/// for missing counts.
	fn generation_input(&self, config: &ServerConfig) -> Result<GenerationInput, String> {
		let mut input = GenerationInput::new(
			self.paragraphs.unwrap_or(config.paragraphs),
			self.sentences.unwrap_or(config.sentences)
		);
		input.seed = self.seed;
		if let Some(probability) = self.commas {
			input.set_comma_probability(probability)?;
		}
		Ok(input)
	}
}

/// Runs one generation request, or explains why the parameters were rejected.
fn generate(config: &ServerConfig, query: &GenerateParams) -> Result<Vec<String>, HttpResponse> {
	let input = match query.generation_input(config) {
		Ok(input) => input,
		Err(e) => {
			log::warn!("rejected generation parameters: {e}");
			return Err(HttpResponse::BadRequest().body(e));
		}
	};
	log::info!(
		"generate paragraphs={} sentences={} seed={:?}",
		input.paragraphs(),
		input.sentences(),
		input.seed
	);
	Ok(Generator::from_input(&input).generate(&input))
}

/// HTTP GET endpoint `/v1/generate`
///
/// Returns the generated paragraphs as a JSON array of strings.
#[get("/v1/generate")]
async fn get_generated(config: web::Data<ServerConfig>, query: web::Query<GenerateParams>) -> impl Responder {
	match generate(&config, &query) {
		Ok(paragraphs) => HttpResponse::Ok().json(paragraphs),
		Err(response) => response
	}
}

/// HTTP GET endpoint `/v1/generate/text`
///
/// Returns the generated paragraphs separated by a blank line.
#[get("/v1/generate/text")]
async fn get_generated_text(config: web::Data<ServerConfig>, query: web::Query<GenerateParams>) -> impl Responder {
	match generate(&config, &query) {
		Ok(paragraphs) => HttpResponse::Ok()
			.content_type("text/plain; charset=utf-8")
			.body(join_paragraphs(&paragraphs)),
		Err(response) => response
	}
}

#[get("/v1/words")]
async fn get_words() -> impl Responder {
	HttpResponse::Ok().body(word_bank::words().join("\n"))
}

/// Default generation parameters, as JSON.
#[get("/v1/config")]
async fn get_config(config: web::Data<ServerConfig>) -> impl Responder {
	HttpResponse::Ok().json(GenerationInput::new(config.paragraphs, config.sentences))
}

#[get("/v1/health")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().body("ok")
}

/// Main entry point for the server.
///
/// Reads the configuration from the environment and starts an Actix-web
/// HTTP server. The generator is stateless, so nothing is shared between
/// workers besides the read-only configuration.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = ServerConfig::from_env();
	log::info!("listening on {}:{}", config.host, config.port);
	let bind = (config.host.clone(), config.port);
	let shared_config = web::Data::new(config);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_config.clone())
			.service(get_generated)
			.service(get_generated_text)
			.service(get_words)
			.service(get_config)
			.service(get_health)
	})
		.bind(bind)?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;
	use lorem_gen_core::CANONICAL_SENTENCE;

	macro_rules! app {
		() => {
			test::init_service(
				App::new()
					.app_data(web::Data::new(ServerConfig::default()))
					.service(get_generated)
					.service(get_generated_text)
					.service(get_words)
					.service(get_config)
					.service(get_health)
			)
			.await
		};
	}

	#[actix_web::test]
	async fn generate_returns_requested_paragraphs() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/generate?paragraphs=4&sentences=2").to_request();
		let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.len(), 4);
		assert!(body[0].starts_with(CANONICAL_SENTENCE));
	}

	#[actix_web::test]
	async fn generate_uses_defaults() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/generate").to_request();
		let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.len(), 3);
	}

	#[actix_web::test]
	async fn generate_clamps_counts() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/generate?paragraphs=-3&sentences=2").to_request();
		let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
		assert!(body.is_empty());

		let req = test::TestRequest::get().uri("/v1/generate?paragraphs=500&sentences=0").to_request();
		let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.len(), 100);
		assert_eq!(body[0], CANONICAL_SENTENCE);
		assert!(body[1..].iter().all(String::is_empty));
	}

	#[actix_web::test]
	async fn seed_makes_output_reproducible() {
		let app = app!();
		let uri = "/v1/generate?paragraphs=3&sentences=4&seed=1234";
		let a: Vec<String> = test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await;
		let b: Vec<String> = test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await;
		assert_eq!(a, b);
	}

	#[actix_web::test]
	async fn invalid_comma_probability_is_rejected() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/generate?commas=3.5").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn text_joins_with_blank_lines() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/generate/text?paragraphs=3&sentences=1").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let expected = format!("{CANONICAL_SENTENCE}\n\n");
		let text = String::from_utf8(body.to_vec()).unwrap();
		assert!(text.starts_with(&expected));
		assert_eq!(text.split("\n\n").count(), 3);
	}

	#[actix_web::test]
	async fn words_lists_the_bank() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/words").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let text = String::from_utf8(body.to_vec()).unwrap();
		assert_eq!(text.lines().count(), word_bank::len());
	}

	#[actix_web::test]
	async fn config_exposes_defaults() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/config").to_request();
		let body: GenerationInput = test::call_and_read_body_json(&app, req).await;
		assert_eq!((body.paragraphs(), body.sentences()), (3, 5));
		assert_eq!(body.seed, None);
		assert_eq!(body.comma_rule().probability(), 0.3);
	}

	#[actix_web::test]
	async fn health() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/health").to_request();
		let resp = test::call_service(&app, req).await;
		assert!(resp.status().is_success());
	}
}
