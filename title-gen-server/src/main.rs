use std::env;
use std::ops::RangeInclusive;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use title_gen_core::io::{parse_lines, write_rows};
use title_gen_core::model::word_lists::{default_features, DEFAULT_MODEL};
use title_gen_core::{GeneratedRow, GenerationError, GenerationSettings, Generator, WordLists};

/// Address used when `TITLE_GEN_BIND` is not set.
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Row count used when the request does not set one.
const DEFAULT_NUM: usize = 50;

/// Row counts accepted per request.
const NUM_RANGE: RangeInclusive<usize> = 10..=500;

/// Body of the `/v1/generate` and `/v1/export` endpoints.
///
/// Every field is optional: missing word lists fall back to the built-in
/// defaults, missing settings keep their default values.
/// `features` and `marketing` are newline-delimited text.
#[derive(Deserialize, Default)]
struct GenerateRequest {
	model: Option<String>,
	features: Option<String>,
	marketing: Option<String>,
	num: Option<usize>,
	seed: Option<u64>,
	title_min_len: Option<usize>,
	title_max_len: Option<usize>,
	max_attempts: Option<usize>,
	keyword_target: Option<usize>,
	keyword_ceiling: Option<usize>,
}

impl GenerateRequest {
	/// Builds the settings, applying only the overrides that were sent.
	fn settings(&self) -> Result<GenerationSettings, GenerationError> {
		let mut settings = GenerationSettings::default();

		if self.title_min_len.is_some() || self.title_max_len.is_some() {
			let window = settings.title_window();
			settings.set_title_window(
				self.title_min_len.unwrap_or(*window.start()),
				self.title_max_len.unwrap_or(*window.end()),
			)?;
		}
		if let Some(attempts) = self.max_attempts {
			settings.set_max_attempts(attempts)?;
		}
		if self.keyword_target.is_some() || self.keyword_ceiling.is_some() {
			settings.set_keyword_budget(
				self.keyword_target.unwrap_or(settings.keyword_target()),
				self.keyword_ceiling.unwrap_or(settings.keyword_ceiling()),
			)?;
		}

		Ok(settings)
	}

	fn generator(&self) -> Result<Generator, GenerationError> {
		let model = self.model.as_deref().unwrap_or(DEFAULT_MODEL);
		let features = match &self.features {
			Some(text) => parse_lines(text),
			None => default_features(),
		};
		let marketing = self.marketing.as_deref().map(parse_lines).unwrap_or_default();

		let lists = WordLists::new(model, features, marketing)?;
		Ok(Generator::new(lists, self.settings()?))
	}

	fn num(&self) -> Result<usize, String> {
		let num = self.num.unwrap_or(DEFAULT_NUM);
		if !NUM_RANGE.contains(&num) {
			return Err(format!(
				"num must be between {} and {}, got {}",
				NUM_RANGE.start(), NUM_RANGE.end(), num
			));
		}
		Ok(num)
	}

	fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}

	/// Validates the request and generates its rows.
	fn rows(&self) -> Result<Vec<GeneratedRow>, HttpResponse> {
		let num = self.num().map_err(|e| HttpResponse::BadRequest().body(e))?;
		let generator = self.generator().map_err(|e| error_response(&e))?;
		Ok(generator.generate(num, &mut self.rng()))
	}
}

/// Maps a generation error to an HTTP response.
///
/// Input problems are the caller's fault (400), everything else is ours (500).
fn error_response(error: &GenerationError) -> HttpResponse {
	match error {
		GenerationError::InsufficientFeatures { .. } | GenerationError::InvalidSetting(_) => {
			HttpResponse::BadRequest().body(error.to_string())
		}
		_ => {
			log::error!("Generation failed: {error}");
			HttpResponse::InternalServerError().body(error.to_string())
		}
	}
}

/// HTTP POST endpoint `/v1/generate`
///
/// Generates a batch and returns it as a JSON array of `{title, keywords}`.
#[post("/v1/generate")]
async fn post_generate(request: web::Json<GenerateRequest>) -> impl Responder {
	match request.rows() {
		Ok(rows) => HttpResponse::Ok().json(rows),
		Err(response) => response,
	}
}

/// HTTP POST endpoint `/v1/export`
///
/// Generates a batch and returns it as a two-column CSV attachment.
#[post("/v1/export")]
async fn post_export(request: web::Json<GenerateRequest>) -> impl Responder {
	let rows = match request.rows() {
		Ok(rows) => rows,
		Err(response) => return response,
	};

	let mut body = Vec::new();
	if let Err(e) = write_rows(&mut body, &rows) {
		return error_response(&e);
	}

	HttpResponse::Ok()
		.content_type("text/csv; charset=utf-8")
		.insert_header(("Content-Disposition", "attachment; filename=\"titles.csv\""))
		.body(body)
}

/// HTTP GET endpoint `/v1/defaults`
///
/// Returns the built-in model, feature and marketing lists.
#[get("/v1/defaults")]
async fn get_defaults() -> impl Responder {
	HttpResponse::Ok().json(WordLists::defaults())
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(post_generate)
		.service(post_export)
		.service(get_defaults);
}

/// Main entry point for the server.
///
/// Binds to `TITLE_GEN_BIND` (default `127.0.0.1:5000`). Requests share no
/// state: every request builds its own word lists and random source.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let bind = env::var("TITLE_GEN_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());
	log::info!("Listening on {bind}");

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.configure(configure)
	})
		.bind(bind)?
		.run()
		.await
}
