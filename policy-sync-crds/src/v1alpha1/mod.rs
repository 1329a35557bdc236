pub mod workloadendpoint;
