// ==============================================================================
// lib.rs - GWAS Inflation Factor Library
// ==============================================================================
// Description: Library interface for genomic inflation factor (lambda) modules
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

pub mod cli;
pub mod config;
pub mod converter;
pub mod inflation;
pub mod models;
pub mod output;
pub mod parsers;
pub mod processor;
pub mod validator;
