// Copyright (c) 2025 - Cowboy AI, Inc.
//! Spark Topology Demo
//!
//! Declares a Spark cluster (masters, workers, public web UIs), deploys
//! machines for it and prints the export document handed to the compiler.
//!
//! Run with: cargo run --example spark
//!
//! Settings are taken from STITCH_NAMESPACE, STITCH_ADMIN_ACL and
//! STITCH_MAX_PRICE when set.

use anyhow::{Context, Result};
use cim_stitch::{
    BuildContext, Invariant, LabelId, LabelRule, Machine, MachineConfig, Range, StitchConfig,
};
use tracing::info;

const IMAGE: &str = "quilt/spark";

struct Spark {
    masters: LabelId,
    workers: LabelId,
}

impl Spark {
    fn new(ctx: &mut BuildContext, n_master: usize, n_worker: usize) -> Result<Self> {
        let master = ctx.docker(IMAGE).with_args(["run", "master"]);
        let masters = ctx.replicate(&master, n_master);
        let masters = ctx.new_label("spark-ms", masters);

        let master_hosts = ctx.label(masters)?.children().join(",");
        let worker = ctx
            .docker(IMAGE)
            .with_args(["run", "worker"])
            .with_env([("MASTERS", master_hosts)]);
        let workers = ctx.replicate(&worker, n_worker);
        let workers = ctx.new_label("spark-wk", workers);

        let all_ports = Range::new(1000, 65535)?;
        ctx.connect(all_ports, workers, masters)?;
        ctx.connect(all_ports, masters, workers)?;
        ctx.connect(7077u32, workers, masters)?;

        Ok(Self { masters, workers })
    }

    fn job(&self, ctx: &mut BuildContext, command: &str) -> Result<()> {
        for container in ctx.label_mut(self.masters)?.containers_mut() {
            container.set_env("JOB", command);
        }
        Ok(())
    }

    fn public(&self, ctx: &mut BuildContext) -> Result<()> {
        let public = ctx.public_internet();
        ctx.connect(8080u32, public, self.masters)?;
        ctx.connect(8081u32, public, self.workers)?;
        Ok(())
    }

    fn exclusive(&self, ctx: &mut BuildContext) -> Result<()> {
        ctx.place(self.masters, LabelRule::new(true, self.workers))?;
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = StitchConfig::from_env().context("Invalid stitch configuration")?;
    let mut ctx = BuildContext::with_config(config);

    let n_worker = 3;
    let spark = Spark::new(&mut ctx, 1, n_worker)?;
    spark.exclusive(&mut ctx)?;
    spark.public(&mut ctx)?;
    spark.job(&mut ctx, "run-example SparkPi")?;

    if ctx.namespace().is_empty() {
        ctx.set_namespace("spark-demo");
    }
    if ctx.admin_acl().is_empty() {
        ctx.set_admin_acl(["local"]);
    }

    let base = Machine::new(MachineConfig {
        provider: "AmazonSpot".to_string(),
        region: "us-west-1".to_string(),
        size: "m4.large".to_string(),
        disk_size: 32,
        ..Default::default()
    });
    ctx.deploy_workers(n_worker + 1, &base);
    ctx.deploy_masters(1, &base);

    let public = ctx.public_internet();
    ctx.assert(Invariant::reachable(public, spark.masters), true)?;
    ctx.assert(Invariant::enough(), true)?;

    let stitch = ctx.finish();
    info!(
        "Derived {} port exclusivity rules",
        stitch.port_placements().len()
    );

    println!("{}", stitch.to_json()?);
    Ok(())
}
