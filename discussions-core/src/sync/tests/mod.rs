/*
    Sync scenario tests

    End-to-end exercises of the orchestrator against in-memory
    collaborators: load lifecycle, save lifecycle with redirect, the 403
    escalation, and the gated submit flow.
*/

mod submit_tests;
