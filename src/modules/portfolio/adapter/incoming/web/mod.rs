pub mod routes;
pub mod serializers;
