use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use catalog::{Movie, MovieId, UserPreferences};
use discovery::{DiscoveryService, DEFAULT_RECOMMENDATION_LIMIT};
use pipeline::{FilterCriteria, SortBy, SortDirection, WatchStatus};
use rand::Rng;
use recommender::Recommendation;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// MovieDiscover - browse, rate and get recommendations from a movie catalog
#[derive(Parser)]
#[command(name = "movie-discover")]
#[command(about = "Movie discovery with filtering and preference-based recommendations", long_about = None)]
struct Cli {
    /// Catalog directory holding movies.json and preferences.json.
    /// The built-in sample catalog is used when omitted.
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies with optional filters, search and sort
    List {
        /// Exact genre label
        #[arg(long)]
        genre: Option<String>,

        /// Exact director name
        #[arg(long)]
        director: Option<String>,

        /// Only watched (true) or unwatched (false) movies
        #[arg(long, action = clap::ArgAction::Set)]
        watched: Option<bool>,

        /// Earliest release year (inclusive)
        #[arg(long)]
        year_from: Option<u16>,

        /// Latest release year (inclusive)
        #[arg(long)]
        year_to: Option<u16>,

        /// Case-insensitive text matched against title and description
        #[arg(long)]
        search: Option<String>,

        /// title, year, rating or userRating
        #[arg(long, default_value = "title")]
        sort_by: SortBy,

        /// asc or desc
        #[arg(long, default_value = "asc")]
        direction: SortDirection,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show recommendations based on the saved preferences
    Recommend {
        /// Number of recommendations to show
        #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
        limit: usize,

        /// Show why each movie was recommended
        #[arg(long)]
        explain: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rate a movie from 1 to 10 (also marks it watched)
    Rate {
        #[arg(long)]
        movie_id: MovieId,

        #[arg(long, allow_negative_numbers = true)]
        rating: i64,
    },

    /// Mark a movie watched (or unwatched)
    Watch {
        #[arg(long)]
        movie_id: MovieId,

        /// Clear the watched flag instead of setting it
        #[arg(long)]
        unwatched: bool,
    },

    /// Replace favorite genres and directors
    Prefs {
        /// Favorite genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Favorite director (repeatable)
        #[arg(long = "director")]
        directors: Vec<String>,
    },

    /// List the genres and directors present in the catalog
    Facets,

    /// Time query and recommendation on a synthetic catalog
    Benchmark {
        /// Size of the synthetic catalog
        #[arg(long, default_value = "10000")]
        movies: u32,

        /// Number of timed iterations
        #[arg(long, default_value = "100")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            genre,
            director,
            watched,
            year_from,
            year_to,
            search,
            sort_by,
            direction,
            json,
        } => {
            let criteria = FilterCriteria {
                genre,
                director,
                watched: WatchStatus::from(watched),
                year_from,
                year_to,
                search_query: search,
                sort_by,
                sort_direction: direction,
            };
            handle_list(&open_catalog(data_dir).await?, criteria, json).await
        }
        Commands::Recommend {
            limit,
            explain,
            json,
        } => handle_recommend(&open_catalog(data_dir).await?, limit, explain, json).await,
        Commands::Rate { movie_id, rating } => {
            handle_rate(&open_catalog(data_dir).await?, movie_id, rating).await
        }
        Commands::Watch {
            movie_id,
            unwatched,
        } => handle_watch(&open_catalog(data_dir).await?, movie_id, !unwatched).await,
        Commands::Prefs { genres, directors } => {
            handle_prefs(&open_catalog(data_dir).await?, genres, directors).await
        }
        Commands::Facets => {
            handle_facets(&open_catalog(data_dir).await?).await;
            Ok(())
        }
        // The benchmark builds its own synthetic catalog
        Commands::Benchmark { movies, iterations } => handle_benchmark(movies, iterations),
    }
}

/// Start a session on `data_dir`, or on the sample catalog when none is given
async fn open_catalog(data_dir: Option<&Path>) -> Result<DiscoveryService> {
    let start = Instant::now();
    let service = match data_dir {
        Some(dir) => DiscoveryService::load(dir)
            .await
            .context("Failed to load movie catalog")?,
        None => DiscoveryService::sample(),
    };
    info!("Loaded catalog in {:?}", start.elapsed());
    Ok(service)
}

/// Handle the 'list' command
async fn handle_list(service: &DiscoveryService, criteria: FilterCriteria, json: bool) -> Result<()> {
    service.set_filters(criteria).await;
    let movies = service.visible_movies().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        println!("{}", "No movies found matching your criteria.".yellow());
        return Ok(());
    }

    println!("{}", format!("{} movies:", movies.len()).bold().blue());
    for movie in &movies {
        print_movie(movie);
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    service: &DiscoveryService,
    limit: usize,
    explain: bool,
    json: bool,
) -> Result<()> {
    if explain {
        let explained: Vec<Recommendation> = service
            .explained_recommendations()
            .await
            .into_iter()
            .take(limit)
            .collect();
        if json {
            println!("{}", serde_json::to_string_pretty(&explained)?);
        } else {
            print_explained(&explained);
        }
        return Ok(());
    }

    let recommendations = service.top_recommendations(limit).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        print_recommendations(&recommendations);
    }
    Ok(())
}

/// Handle the 'rate' command
async fn handle_rate(service: &DiscoveryService, movie_id: MovieId, rating: i64) -> Result<()> {
    let movie = service.rate_movie(movie_id, rating).await?;
    println!(
        "{} Rated {} {}/10",
        "✓".green(),
        movie.title.bold(),
        rating
    );
    print_recommendations(&service.top_recommendations(DEFAULT_RECOMMENDATION_LIMIT).await);
    Ok(())
}

/// Handle the 'watch' command
async fn handle_watch(service: &DiscoveryService, movie_id: MovieId, watched: bool) -> Result<()> {
    let movie = service.set_watched_status(movie_id, watched).await?;
    let status = if movie.watched { "watched" } else { "unwatched" };
    println!("{} Marked {} as {}", "✓".green(), movie.title.bold(), status);
    print_recommendations(&service.top_recommendations(DEFAULT_RECOMMENDATION_LIMIT).await);
    Ok(())
}

/// Handle the 'prefs' command
async fn handle_prefs(
    service: &DiscoveryService,
    genres: Vec<String>,
    directors: Vec<String>,
) -> Result<()> {
    let current = service.preferences().await;
    let preferences = UserPreferences {
        watch_later: current.watch_later,
        ..UserPreferences::new()
            .with_genres(genres)
            .with_directors(directors)
    };
    let stored = service.update_preferences(preferences).await;

    println!("{}", "Preferences saved:".bold().blue());
    println!("{}Genres: {}", "• ".green(), join_or_none(&stored.favorite_genres));
    println!("{}Directors: {}", "• ".green(), join_or_none(&stored.favorite_directors));
    print_recommendations(&service.top_recommendations(DEFAULT_RECOMMENDATION_LIMIT).await);
    Ok(())
}

/// Handle the 'facets' command
async fn handle_facets(service: &DiscoveryService) {
    let facets = service.facets().await;
    println!("{}", "Genres:".bold().blue());
    for genre in &facets.genres {
        println!("  - {}", genre);
    }
    println!("{}", "Directors:".bold().blue());
    for director in &facets.directors {
        println!("  - {}", director);
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(size: u32, iterations: usize) -> Result<()> {
    anyhow::ensure!(iterations > 0, "iterations must be at least 1");

    let mut rng = rand::rng();
    let movies = synthetic_catalog(&mut rng, size);
    info!("Generated synthetic catalog of {} movies", movies.len());
    let preferences = UserPreferences::new()
        .with_genres(["Drama", "Sci-Fi"])
        .with_directors(["Director 7"]);

    let mut query_timings = Vec::with_capacity(iterations);
    let mut recommend_timings = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let criteria = random_criteria(&mut rng);

        let start = Instant::now();
        let visible = pipeline::query(&movies, &criteria);
        query_timings.push(start.elapsed());
        std::hint::black_box(visible);

        let start = Instant::now();
        let recommended = recommender::recommend(&movies, &preferences);
        recommend_timings.push(start.elapsed());
        std::hint::black_box(recommended);
    }

    println!(
        "{}",
        format!("Benchmark results ({} movies, {} iterations):", size, iterations)
            .bold()
            .blue()
    );
    print_latencies("query", query_timings);
    print_latencies("recommend", recommend_timings);
    Ok(())
}

const GENRES: [&str; 8] = [
    "Action", "Adventure", "Comedy", "Crime", "Drama", "Romance", "Sci-Fi", "Thriller",
];

fn synthetic_catalog(rng: &mut impl Rng, size: u32) -> Vec<Movie> {
    (0..size)
        .map(|id| {
            let genre_count = rng.random_range(1usize..=3);
            let genres = (0..genre_count)
                .map(|_| GENRES[rng.random_range(0..GENRES.len())].to_string())
                .collect();
            let watched = rng.random_bool(0.3);
            Movie {
                id,
                title: format!("Movie {}", rng.random_range(0..size.max(1))),
                year: rng.random_range(1950..=2024),
                director: format!("Director {}", rng.random_range(0u32..50)),
                genres,
                rating: f32::from(rng.random_range(10u8..=100)) / 10.0,
                description: format!("Synthetic movie {} about dreams and heists", id),
                watched,
                user_rating: (watched && rng.random_bool(0.7)).then(|| rng.random_range(1..=10)),
                poster: None,
            }
        })
        .collect()
}

fn random_criteria(rng: &mut impl Rng) -> FilterCriteria {
    let sort_by = match rng.random_range(0u8..4) {
        0 => SortBy::Title,
        1 => SortBy::Year,
        2 => SortBy::Rating,
        _ => SortBy::UserRating,
    };
    let mut criteria = FilterCriteria::new()
        .sorted_by(sort_by, SortDirection::from_ascending(rng.random_bool(0.5)));
    if rng.random_bool(0.5) {
        criteria = criteria.with_genre(GENRES[rng.random_range(0..GENRES.len())]);
    }
    if rng.random_bool(0.3) {
        criteria = criteria.with_watched(WatchStatus::from(Some(rng.random_bool(0.5))));
    }
    if rng.random_bool(0.3) {
        let from = rng.random_range(1950..=2000);
        criteria = criteria.with_years(Some(from), Some(from + 20));
    }
    if rng.random_bool(0.2) {
        criteria = criteria.with_search("heist");
    }
    criteria
}

fn print_latencies(label: &str, mut timings: Vec<Duration>) {
    let total: Duration = timings.iter().sum();
    let avg = total / timings.len() as u32;
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];

    println!("{}", label.bold());
    println!("  Average latency: {:?}", avg);
    println!("  P50 latency: {:?}", p50);
    println!("  P95 latency: {:?}", p95);
    println!("  P99 latency: {:?}", p99);
}

fn print_movie(movie: &Movie) {
    let status = if movie.watched {
        "watched".green()
    } else {
        "unwatched".dimmed()
    };
    let user_rating = movie
        .user_rating
        .map(|r| format!(" - Your rating: {}", r))
        .unwrap_or_default();
    println!(
        "{:>4}. {} ({}) [{}] {} - Rating: {:.1}{} ({})",
        movie.id,
        movie.title.bold(),
        movie.year,
        movie.genres.join(", "),
        movie.director,
        movie.rating,
        user_rating,
        status
    );
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Movie]) {
    println!("{}", "Recommended For You:".bold().blue());
    if recommendations.is_empty() {
        println!(
            "  No recommendations available yet. Pick some favorite genres or directors with `prefs`."
        );
        return;
    }
    for (i, movie) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) - Rating: {:.1}{}",
            (i + 1).to_string().green(),
            movie.title,
            movie.year,
            movie.rating,
            if movie.watched { " [watched]" } else { "" }
        );
    }
}

fn print_explained(recommendations: &[Recommendation]) {
    println!("{}", "Recommended For You:".bold().blue());
    if recommendations.is_empty() {
        println!(
            "  No recommendations available yet. Pick some favorite genres or directors with `prefs`."
        );
        return;
    }
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) - Rating: {:.1}{}",
            (i + 1).to_string().green(),
            rec.movie.title,
            rec.movie.year,
            rec.movie.rating,
            if rec.movie.watched { " [watched]" } else { "" }
        );
        println!("   Because {}", rec.reason.describe(&rec.movie.director));
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}
