use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, Utc};
use folio_api::{Author, Comment, CommentId, Portfolio, PortfolioFile, PortfolioId};
use folio_client::{Snapshot, CATEGORIES};
use rand::{seq::SliceRandom, Rng};

const NUM_AUTHORS: usize = 12;
const NUM_PORTFOLIOS: usize = 40;
const NUM_COMMENTS: usize = 25;

const MAX_FILES: usize = 5;
const MAX_REPLIES: usize = 3;
const TITLE_WORDS: usize = 4;
const DESCRIPTION_WORDS: usize = 40;
const COMMENT_WORDS: usize = 25;

const ROLES: &[&str] = &[
    "Brand Designer",
    "Product Designer",
    "Illustrator",
    "Photographer",
    "Frontend Developer",
    "Motion Designer",
    "Creative Director",
    "Senior Brand Strategist",
];

fn gen_image(rng: &mut impl Rng, w: u32, h: u32) -> String {
    format!("https://picsum.photos/seed/{}/{}/{}", rng.gen::<u32>(), w, h)
}

fn gen_author(rng: &mut impl Rng) -> Author {
    let avatar = match rng.gen_bool(0.8) {
        true => Some(gen_image(rng, 100, 100)),
        false => None,
    };
    Author {
        name: lipsum::lipsum_title().split(' ').take(2).collect::<Vec<_>>().join(" "),
        avatar,
        role: String::from(*ROLES.choose(rng).unwrap_or(&"Designer")),
        is_expert: rng.gen_bool(0.3).then_some(true),
    }
}

fn gen_comment(
    rng: &mut impl Rng,
    author: Author,
    id: String,
    replies: Option<Vec<Comment>>,
) -> Comment {
    Comment {
        id: CommentId(id),
        author,
        content: lipsum::lipsum_words(rng.gen_range(5..COMMENT_WORDS)),
        created_at: Utc::now() - Duration::minutes(rng.gen_range(1..60 * 24 * 400)),
        likes: rng.gen_range(0..50),
        replies,
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();

    let authors = (0..NUM_AUTHORS)
        .map(|_| gen_author(&mut rng))
        .collect::<Vec<_>>();
    let pick_author =
        |rng: &mut rand::rngs::ThreadRng| authors[rng.gen_range(0..authors.len())].clone();

    let portfolios = (0..NUM_PORTFOLIOS)
        .map(|i| {
            let files = (0..rng.gen_range(1..=MAX_FILES))
                .map(|f| PortfolioFile {
                    url: gen_image(&mut rng, 1200, 800),
                    name: format!("File {}", f + 1),
                })
                .collect::<Vec<_>>();
            Arc::new(Portfolio {
                id: PortfolioId((i + 1).to_string()),
                title: lipsum::lipsum_words(TITLE_WORDS),
                author: pick_author(&mut rng),
                description: lipsum::lipsum_words(DESCRIPTION_WORDS),
                category: String::from(CATEGORIES[rng.gen_range(1..CATEGORIES.len())]),
                thumbnail: files[0].url.replace("1200/800", "800/600"),
                view_count: rng.gen_range(0..20_000),
                review_count: rng.gen_range(0..120),
                rating: rng
                    .gen_bool(0.85)
                    .then(|| f64::from(rng.gen_range(30..=50u8)) / 10.),
                files,
                featured: rng.gen_bool(0.25),
            })
        })
        .collect();

    // Roots are stored newest first, as if they had been posted one by one
    let mut comments = (0..NUM_COMMENTS)
        .map(|i| {
            let replies = (0..rng.gen_range(0..=MAX_REPLIES))
                .map(|r| {
                    let author = pick_author(&mut rng);
                    gen_comment(&mut rng, author, format!("c{}-r{}", i + 1, r + 1), None)
                })
                .collect();
            let author = pick_author(&mut rng);
            gen_comment(&mut rng, author, format!("c{}", i + 1), Some(replies))
        })
        .collect::<Vec<_>>();
    comments.sort_by_key(|c| std::cmp::Reverse(c.created_at));

    let snapshot = Snapshot {
        portfolios,
        comments,
    };
    let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
    println!("{}", json);
    Ok(())
}
