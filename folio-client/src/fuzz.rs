#![cfg(test)]

use std::sync::Arc;

use chrono::Utc;

use crate::{
    api::{Author, Comment, CommentId, Portfolio, PortfolioId},
    search, CommentTree, ListingQuery, Settings, SortExt, SortKey, ThreadView,
};

fn example_tree() -> CommentTree {
    let author = Author {
        name: String::from("Sarah Chen"),
        avatar: None,
        role: String::from("Senior Brand Strategist"),
        is_expert: Some(true),
    };
    CommentTree::new(
        vec![Comment {
            id: CommentId::from("c1"),
            author,
            content: String::from("Nice"),
            created_at: Utc::now(),
            likes: 7,
            replies: Some(vec![]),
        }],
        Settings::default().placeholder_author,
    )
}

#[test]
fn posting_grows_roots_by_one_or_not_at_all() {
    bolero::check!()
        .with_type::<String>()
        .cloned()
        .for_each(|s| {
            let mut tree = example_tree();
            let before = tree.clone();
            tree.add_top_level_comment(s.clone());
            if s.trim().is_empty() {
                assert_eq!(tree, before);
            } else {
                assert_eq!(tree.len(), before.len() + 1);
                assert_eq!(tree.comments()[0].content, s);
                assert_eq!(tree.comments()[0].likes, 0);
                assert_eq!(&tree.comments()[1..], before.comments());
            }
        })
}

#[test]
fn replying_grows_parent_replies_by_one_or_not_at_all() {
    bolero::check!()
        .with_type::<(String, String)>()
        .cloned()
        .for_each(|(parent, content)| {
            let mut tree = example_tree();
            let before = tree.clone();
            let parent = CommentId(parent);
            tree.add_reply(&parent, content.clone());
            if parent.as_str() != "c1" || content.trim().is_empty() {
                assert_eq!(tree, before);
            } else {
                assert_eq!(tree.len(), 1);
                let replies = tree.comments()[0].replies();
                assert_eq!(replies.len(), 1);
                assert_eq!(replies[0].content, content);
                assert_eq!(replies[0].replies, None);
            }
        })
}

#[test]
fn like_toggles_cancel_out() {
    bolero::check!()
        .with_type::<u8>()
        .cloned()
        .for_each(|toggles| {
            let tree = example_tree();
            let id = CommentId::from("c1");
            let mut view = ThreadView::new();
            for _ in 0..toggles {
                view.toggle_like(&tree, &id);
            }
            let s = view.state(&tree, &id).unwrap();
            assert_eq!(s.liked, toggles % 2 == 1);
            assert_eq!(s.like_count, 7 + u32::from(toggles % 2));
            assert_eq!(tree.comments()[0].likes, 7);
        })
}

#[test]
fn sorting_keeps_every_portfolio() {
    bolero::check!()
        .with_type::<Vec<(u16, u16, Option<u8>)>>()
        .cloned()
        .for_each(|counts| {
            let portfolios = counts
                .iter()
                .enumerate()
                .map(|(i, (views, reviews, rating))| {
                    Arc::new(Portfolio {
                        id: PortfolioId(i.to_string()),
                        title: format!("Portfolio {i}"),
                        author: Settings::default().placeholder_author,
                        description: String::new(),
                        category: String::from("Branding"),
                        thumbnail: String::new(),
                        view_count: u64::from(*views),
                        review_count: u64::from(*reviews),
                        rating: rating.map(|r| f64::from(r) / 50.),
                        files: Vec::new(),
                        featured: false,
                    })
                })
                .collect::<Vec<_>>();
            assert_eq!(search(&portfolios, &ListingQuery::default()), portfolios);
            for key in SortKey::ALL {
                let mut sorted = portfolios.clone();
                key.sort(&mut sorted);
                assert_eq!(sorted.len(), portfolios.len());
                if key == SortKey::Popular {
                    assert!(sorted.windows(2).all(|w| w[0].view_count >= w[1].view_count));
                }
            }
        })
}
