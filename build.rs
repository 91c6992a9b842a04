fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto");

    // Client only: the backend owns the service implementation
    tonic_prost_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/shortener/v1/shortener.proto"], &["proto"])?;

    Ok(())
}
