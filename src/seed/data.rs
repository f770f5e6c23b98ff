// ABOUTME: Fixed sample content inserted into empty collections
// ABOUTME: Three gestures, two modules, and one quiz question in Indonesian
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use signify_core::models::{Difficulty, GestureDocument, ModuleDocument, QuizQuestionDocument};

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| (*v).to_owned()).collect())
}

fn gesture(
    name: &str,
    slug: &str,
    category: &str,
    video: &str,
    steps: &[&str],
    examples: &[&str],
    tags: &[&str],
) -> GestureDocument {
    GestureDocument {
        name: name.to_owned(),
        slug: slug.to_owned(),
        category: category.to_owned(),
        difficulty: Some(Difficulty::Pemula.as_str().to_owned()),
        thumbnail: Some(format!("/gestures/{slug}.png")),
        video_url: Some(format!("https://videos.example.com/{video}.mp4")),
        steps: strings(steps),
        examples: strings(examples),
        tags: strings(tags),
    }
}

/// Sample gestures, in insertion order
#[must_use]
pub fn gestures() -> Vec<GestureDocument> {
    vec![
        gesture(
            "A",
            "a",
            "A-Z",
            "a",
            &["Angkat tangan kanan", "Bentuk huruf A"],
            &["Nama saya"],
            &["alphabet", "basic"],
        ),
        gesture(
            "B",
            "b",
            "A-Z",
            "b",
            &["Angkat tangan", "Bentuk huruf B"],
            &["Belajar"],
            &["alphabet", "basic"],
        ),
        gesture(
            "Terima Kasih",
            "terima-kasih",
            "Kata Dasar",
            "thanks",
            &["Sentuh dagu", "Gerakkan tangan menjauh"],
            &["Terima kasih atas bantuanmu"],
            &["basic", "courtesy"],
        ),
    ]
}

/// Sample learning modules
#[must_use]
pub fn modules() -> Vec<ModuleDocument> {
    vec![
        ModuleDocument {
            title: "Dasar-Dasar Bahasa Isyarat".to_owned(),
            slug: "dasar-dasar".to_owned(),
            summary: Some("Mulai dari alfabet, angka, dan salam".to_owned()),
            cover: Some("/covers/basic.png".to_owned()),
            lessons: strings(&["Alfabet", "Angka", "Salam"]),
            difficulty: Some(Difficulty::Pemula.as_str().to_owned()),
        },
        ModuleDocument {
            title: "Ekspresi Emosi".to_owned(),
            slug: "ekspresi-emosi".to_owned(),
            summary: Some("Bahasa isyarat untuk emosi umum".to_owned()),
            cover: Some("/covers/emotion.png".to_owned()),
            lessons: strings(&["Senang", "Sedih", "Marah"]),
            difficulty: Some(Difficulty::Menengah.as_str().to_owned()),
        },
    ]
}

/// Sample quiz questions
#[must_use]
pub fn quiz_questions() -> Vec<QuizQuestionDocument> {
    vec![QuizQuestionDocument {
        module_slug: "dasar-dasar".to_owned(),
        prompt: "Gestur mana yang berarti 'Terima Kasih'?".to_owned(),
        media: None,
        options: strings(&[
            "Sentuh dagu lalu jauhkan tangan",
            "Kepal tangan",
            "Telapak ke atas",
        ]),
        answer_index: Some(0),
    }]
}
