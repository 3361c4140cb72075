use diesel::{allow_tables_to_appear_in_same_query, joinable, table};

table! {
    settings (key) {
        key -> Text,
        value -> Text,
    }
}

table! {
    companies (id) {
        id -> Integer,
        name -> Text,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}

table! {
    users (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}

table! {
    roles (id) {
        id -> Integer,
        name -> Text,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}

table! {
    services (id) {
        id -> Integer,
        name -> Text,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}

table! {
    companies_users_link (id) {
        id -> Integer,
        company_id -> Integer,
        user_id -> Integer,
        role_id -> Integer,
        is_active -> Bool,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}

table! {
    events (id) {
        id -> Integer,
        service_id -> Integer,
        client_first_name -> Text,
        client_last_name -> Text,
        client_email -> Text,
        client_phone -> Text,
        start_time -> Timestamp,
        end_time -> Timestamp,
        status -> Text,
        notes -> Nullable<Text>,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}

joinable!(companies_users_link -> companies (company_id));
joinable!(companies_users_link -> users (user_id));
joinable!(companies_users_link -> roles (role_id));
joinable!(events -> services (service_id));

allow_tables_to_appear_in_same_query!(companies, users, roles, services, companies_users_link, events,);
