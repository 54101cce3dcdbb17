use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use dlog_proof::{
    BigIntegerField, Group, P256, PointField, Proof, Secp256k1, SecureRng, SerializerField,
    generate_random_number,
};
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "dlog")]
#[command(about = "Non-interactive Schnorr proofs of discrete-log knowledge", long_about = None)]
#[command(version)]
struct Cli {
    /// Curve to work over
    #[arg(short, long, value_enum, env = "DLOG_CURVE", default_value = "secp256k1")]
    curve: Curve,

    /// Session id the proof is bound to
    #[arg(long, env = "DLOG_SID", default_value = "sid")]
    sid: String,

    /// Party id the proof is bound to
    #[arg(long, env = "DLOG_PID", default_value = "1")]
    pid: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Curve {
    Secp256k1,
    P256,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sample a key, time proof generation and verification
    Demo,

    /// Sample a key pair and print it as JSON
    Keygen,

    /// Prove knowledge of a secret key given as a decimal integer
    Prove {
        #[arg(short = 'x', long)]
        secret: String,
    },

    /// Verify a JSON proof against a hex-encoded public key
    Verify {
        #[arg(short = 'y', long)]
        public: String,

        #[arg(short, long)]
        proof: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.curve {
        Curve::Secp256k1 => run::<Secp256k1>(&cli),
        Curve::P256 => run::<P256>(&cli),
    }
}

fn run<G: Group>(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SecureRng::new();
    let points = PointField::<G>::new();

    match &cli.command {
        Commands::Demo => {
            let x = generate_random_number(&mut rng)?;
            println!("{x}");
            let x = G::scalar_from_uint(&x);
            let y = G::scalar_mul(&G::generator(), &x);

            let start = Instant::now();
            let proof = Proof::<G>::prove(&mut rng, &cli.sid, cli.pid, &x, &y)?;
            println!("Proof computation time: {} ms", start.elapsed().as_millis());

            println!();
            println!("{}", proof.to_str());

            let start = Instant::now();
            let valid = proof.verify(&cli.sid, cli.pid, &y);
            println!("Verify computation time: {} ms", start.elapsed().as_millis());

            if valid {
                println!("DLOG proof is correct");
            } else {
                println!("DLOG proof is not correct");
            }
        }

        Commands::Keygen => {
            let x = G::scalar_from_uint(&generate_random_number(&mut rng)?);
            let y = G::scalar_mul(&G::generator(), &x);
            let keys = json!({
                "x": BigIntegerField.serialize(&G::scalar_to_uint(&x)),
                "y": points.serialize(&y),
            });
            println!("{keys}");
        }

        Commands::Prove { secret } => {
            let x = BigIntegerField.deserialize(&Value::String(secret.clone()))?;
            let x = G::scalar_from_uint(&x);
            let y = G::scalar_mul(&G::generator(), &x);

            let proof = Proof::<G>::prove(&mut rng, &cli.sid, cli.pid, &x, &y)?;
            info!(curve = G::name(), sid = %cli.sid, pid = cli.pid, "proof generated");

            let output = json!({ "y": points.serialize(&y), "proof": proof.to_dict() });
            println!("{output}");
        }

        Commands::Verify { public, proof } => {
            let y = points.deserialize(&Value::String(public.clone()))?;
            let proof: Proof<G> = proof.parse()?;

            if proof.verify(&cli.sid, cli.pid, &y) {
                println!("DLOG proof is correct");
            } else {
                println!("DLOG proof is not correct");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
