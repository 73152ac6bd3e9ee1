// Database schema for the movie review service
diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,          // unique
        email -> Text,             // unique
        password -> Text,          // stored as submitted
    }
}

diesel::table! {
    movies (id) {
        id -> Integer,
        title -> Text,             // unique
        poster_url -> Text,
        description -> Text,
    }
}

diesel::table! {
    reviews (id) {
        id -> Integer,
        user_id -> Integer,
        movie_id -> Integer,
        comment -> Text,
        rating -> Integer,         // 1-5 by convention, not enforced
        created_at -> Timestamp,
    }
}

diesel::table! {
    posts (id) {
        id -> Integer,
        title -> Text,
        content -> Text,
        user_id -> Integer,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(reviews -> users (user_id));
diesel::joinable!(reviews -> movies (movie_id));
diesel::joinable!(posts -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, movies, reviews, posts,);
