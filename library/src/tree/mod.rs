pub mod segtree;
